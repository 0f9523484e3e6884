use yew::prelude::*;

use crate::components::anchor_link::AnchorLink;
use crate::components::counter::AnimatedCounter;
use crate::components::demo_form::DemoForm;
use crate::components::faq::{FaqAccordion, FaqEntry};
use crate::components::header::MainHeader;
use crate::components::reveal::Reveal;
use crate::utils::page_timer::use_time_on_page;

const PAINS: [(&str, &str, &str); 3] = [
    (
        "fa-clock",
        "Leads esfriam na espera",
        "Cada hora sem resposta derruba a chance de fechar. Seu time responde quando dá, não quando o cliente quer.",
    ),
    (
        "fa-comments",
        "WhatsApp virou bagunça",
        "Conversas espalhadas em vários celulares, sem histórico e sem saber quem atendeu quem.",
    ),
    (
        "fa-chart-line",
        "Sem visibilidade do funil",
        "Você não sabe quantos contatos chegaram, quantos foram atendidos e quantos viraram venda.",
    ),
];

const SOLUTIONS: [(&str, &str, &str); 3] = [
    (
        "fa-bolt",
        "Resposta em segundos",
        "Todo lead recebe retorno imediato e é direcionado ao vendedor certo da loja certa.",
    ),
    (
        "fa-inbox",
        "Caixa única de atendimento",
        "Todas as conversas da equipe em um só lugar, com histórico completo do cliente.",
    ),
    (
        "fa-tachometer-alt",
        "Painel de conversão",
        "Acompanhe em tempo real tempo de resposta, taxa de conversão e desempenho por loja.",
    ),
];

const METRICS: [(&str, &str); 3] = [
    ("87%", "dos clientes compram de quem responde primeiro"),
    ("3x", "mais agendamentos com resposta em até 5 minutos"),
    ("40%", "de aumento médio nas vendas em 90 dias"),
];

const BENEFITS: [&str; 4] = [
    "Implantação em até 7 dias",
    "Treinamento da equipe incluso",
    "Integração com WhatsApp Business",
    "Suporte em português",
];

fn faq_entries() -> Vec<FaqEntry> {
    [
        (
            "Preciso trocar meu número de WhatsApp?",
            "Não. A CloserFlow se conecta ao WhatsApp Business que sua loja já usa.",
        ),
        (
            "Quanto tempo leva para começar?",
            "A implantação completa leva até 7 dias, incluindo o treinamento da sua equipe.",
        ),
        (
            "Funciona para redes com várias lojas?",
            "Sim. Os leads são distribuídos por loja e você acompanha o desempenho de cada unidade.",
        ),
        (
            "Existe fidelidade no contrato?",
            "Não. Os planos são mensais e podem ser cancelados a qualquer momento.",
        ),
    ]
    .into_iter()
    .map(|(question, answer)| FaqEntry {
        question: question.into(),
        answer: answer.into(),
    })
    .collect()
}

#[function_component(Landing)]
pub fn landing() -> Html {
    use_time_on_page();

    html! {
        <>
        <style>{ LANDING_CSS }</style>
        <MainHeader />
        <main>
            <section id="inicio" class="hero">
                <div class="container">
                    <h1>{"Pare de perder vendas por demora no atendimento"}</h1>
                    <p class="hero-subtitle">
                        {"A CloserFlow responde, distribui e acompanha cada lead da sua loja para que nenhum cliente fique sem resposta."}
                    </p>
                    <div class="hero-stats">
                        <div class="stat">
                            <AnimatedCounter class={classes!("stat-number")} text="500" />
                            <span class="stat-label">{"lojas atendidas"}</span>
                        </div>
                        <div class="stat">
                            <AnimatedCounter class={classes!("stat-number")} text="2" />
                            <span class="stat-label">{"minutos de tempo médio de resposta"}</span>
                        </div>
                    </div>
                    <AnchorLink href="#demo" class={classes!("btn", "btn-primary")}>
                        {"Quero uma demonstração"}
                    </AnchorLink>
                </div>
            </section>

            <section id="problema" class="pain">
                <div class="container">
                    <h2>{"O problema não é falta de lead"}</h2>
                    <div class="card-grid">
                        { for PAINS.iter().map(|(icon, title, text)| html! {
                            <Reveal class={classes!("pain-card")}>
                                <i class={classes!("fas", *icon)}></i>
                                <h3>{ *title }</h3>
                                <p>{ *text }</p>
                            </Reveal>
                        }) }
                    </div>
                </div>
            </section>

            <section id="solucao" class="solution">
                <div class="container">
                    <h2>{"Como a CloserFlow resolve"}</h2>
                    <div class="card-grid">
                        { for SOLUTIONS.iter().map(|(icon, title, text)| html! {
                            <Reveal class={classes!("solution-card")}>
                                <i class={classes!("fas", *icon)}></i>
                                <h3>{ *title }</h3>
                                <p>{ *text }</p>
                            </Reveal>
                        }) }
                    </div>
                </div>
            </section>

            <section id="resultados" class="results">
                <div class="container">
                    <h2>{"Resultados que aparecem no caixa"}</h2>
                    <div class="metrics">
                        { for METRICS.iter().map(|(value, label)| html! {
                            <Reveal class={classes!("metric-large")}>
                                <AnimatedCounter class={classes!("metric-value")} text={*value} />
                                <p>{ *label }</p>
                            </Reveal>
                        }) }
                    </div>
                    <ul class="benefits">
                        { for BENEFITS.iter().map(|benefit| html! {
                            <li>
                                <Reveal class={classes!("benefit")}>
                                    <i class="fas fa-check"></i>{" "}{ *benefit }
                                </Reveal>
                            </li>
                        }) }
                    </ul>
                </div>
            </section>

            <section id="faq" class="faq">
                <div class="container narrow">
                    <h2>{"Perguntas frequentes"}</h2>
                    <FaqAccordion entries={faq_entries()} />
                </div>
            </section>

            <section id="demo" class="demo">
                <div class="container narrow">
                    <h2>{"Agende uma demonstração gratuita"}</h2>
                    <p>{"Preencha o formulário e mostramos, com os números da sua loja, quanto você está deixando na mesa."}</p>
                    <DemoForm />
                </div>
            </section>
        </main>
        <footer class="main-footer">
            <div class="container">
                <p>{"© CloserFlow. Todos os direitos reservados."}</p>
                <AnchorLink href="#inicio">{"Voltar ao topo"}</AnchorLink>
            </div>
        </footer>
        </>
    }
}

const LANDING_CSS: &str = r#"
:root {
    --primary: #2563eb;
    --danger: #ef4444;
    --success: #10b981;
    --text: #1f2937;
    --muted: #6b7280;
}
* { box-sizing: border-box; }
body { margin: 0; font-family: 'Inter', system-ui, sans-serif; color: var(--text); }
.container { max-width: 1120px; margin: 0 auto; padding: 0 1.5rem; }
.container.narrow { max-width: 720px; }
section { padding: 5rem 0; }
h2 { font-size: 2rem; text-align: center; margin-bottom: 2.5rem; }

.main-header { position: sticky; top: 0; z-index: 100; background: #fff; box-shadow: 0 1px 8px rgba(0,0,0,0.08); }
.header-inner { display: flex; align-items: center; justify-content: space-between; height: 72px; }
.logo { font-weight: 800; font-size: 1.4rem; color: var(--primary); text-decoration: none; }
.nav-menu { display: flex; gap: 1.5rem; }
.nav-menu a { color: var(--text); text-decoration: none; font-weight: 500; }
.mobile-toggle { display: none; background: none; border: none; cursor: pointer; }
.mobile-toggle span { display: block; width: 24px; height: 2px; margin: 5px 0; background: var(--text); transition: transform 0.3s ease; }
@media (max-width: 768px) {
    .mobile-toggle { display: block; }
    .nav-menu { display: none; position: absolute; top: 72px; left: 0; right: 0; flex-direction: column; padding: 1.5rem; background: #fff; }
    .nav-menu.active { display: flex; }
    .mobile-toggle.active span:nth-child(1) { transform: translateY(7px) rotate(45deg); }
    .mobile-toggle.active span:nth-child(2) { opacity: 0; }
    .mobile-toggle.active span:nth-child(3) { transform: translateY(-7px) rotate(-45deg); }
}

.hero { background: linear-gradient(135deg, #eff6ff, #fff); text-align: center; }
.hero h1 { font-size: 2.75rem; max-width: 800px; margin: 0 auto 1.5rem; }
.hero-subtitle { font-size: 1.2rem; color: var(--muted); max-width: 640px; margin: 0 auto 2rem; }
.hero-stats { display: flex; justify-content: center; gap: 3rem; margin-bottom: 2rem; }
.stat-number, .metric-value { display: block; font-size: 2.5rem; font-weight: 800; color: var(--primary); }
.stat-label { color: var(--muted); }

.btn { display: inline-block; padding: 0.9rem 1.8rem; border-radius: 0.5rem; border: none; font-weight: 600; cursor: pointer; text-decoration: none; }
.btn-primary { background: var(--primary); color: #fff; }
.btn-primary:disabled { opacity: 0.7; cursor: wait; }
.btn-block { width: 100%; }

.card-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(260px, 1fr)); gap: 1.5rem; }
.pain-card, .solution-card, .metric-large, .benefit {
    opacity: 0; transform: translateY(24px); transition: opacity 0.6s ease, transform 0.6s ease;
}
.pain-card.animate-in, .solution-card.animate-in, .metric-large.animate-in, .benefit.animate-in {
    opacity: 1; transform: none;
}
.pain-card, .solution-card { padding: 2rem; border-radius: 1rem; background: #fff; box-shadow: 0 4px 20px rgba(0,0,0,0.06); }
.pain-card i { color: var(--danger); font-size: 1.8rem; }
.solution-card i { color: var(--success); font-size: 1.8rem; }
.metrics { display: grid; grid-template-columns: repeat(auto-fit, minmax(220px, 1fr)); gap: 2rem; text-align: center; }
.benefits { list-style: none; padding: 0; display: flex; flex-wrap: wrap; justify-content: center; gap: 1.5rem; margin-top: 3rem; }
.benefit i { color: var(--success); }

.faq-item { border-bottom: 1px solid #e5e7eb; }
.faq-question { display: flex; justify-content: space-between; align-items: center; padding: 1.25rem 0; cursor: pointer; font-weight: 600; }
.faq-question i { transition: transform 0.3s ease; }
.faq-item.active .faq-question i { transform: rotate(180deg); }
.faq-answer { max-height: 0; overflow: hidden; transition: max-height 0.3s ease; color: var(--muted); }
.faq-item.active .faq-answer { max-height: 400px; }

.demo { background: #f9fafb; }
.demo p { text-align: center; color: var(--muted); }
.demo-form { background: #fff; padding: 2rem; border-radius: 1rem; box-shadow: 0 10px 40px rgba(0,0,0,0.08); }
.form-row { display: grid; grid-template-columns: 1fr 1fr; gap: 1rem; }
@media (max-width: 640px) { .form-row { grid-template-columns: 1fr; } }
.form-group { margin-bottom: 1.25rem; }
.form-group label { display: block; font-weight: 500; margin-bottom: 0.4rem; }
.form-control { width: 100%; padding: 0.75rem 1rem; border: 1px solid #d1d5db; border-radius: 0.5rem; font: inherit; }
.form-control.error { border-color: var(--danger); }
.form-control.success { border-color: var(--success); }
.form-control.highlight { border-color: var(--danger); }
.checkbox-group label { display: flex; gap: 0.5rem; align-items: flex-start; font-weight: 400; }
.error-message { color: var(--danger); font-size: 0.875rem; margin-top: 0.25rem; display: flex; align-items: center; gap: 0.5rem; }
.general-error {
    background: rgba(239, 68, 68, 0.1); border: 1px solid var(--danger); color: var(--danger);
    padding: 1rem; border-radius: 0.5rem; margin-bottom: 1.5rem;
    display: flex; align-items: center; gap: 0.75rem; animation: shake 0.5s ease;
}
.success-message {
    position: fixed; top: 100px; right: 20px; background: var(--success); color: #fff;
    padding: 20px; border-radius: 10px; box-shadow: 0 10px 30px rgba(0,0,0,0.3);
    z-index: 10000; max-width: 400px; animation: slideIn 0.3s ease;
}
.success-message.leaving { animation: slideOut 0.3s ease forwards; }
.success-content { display: flex; align-items: flex-start; gap: 15px; }
.close-message { background: none; border: none; color: #fff; font-size: 24px; cursor: pointer; padding: 0; margin-left: auto; }
@keyframes slideIn { from { transform: translateX(100%); opacity: 0; } to { transform: translateX(0); opacity: 1; } }
@keyframes slideOut { from { transform: translateX(0); opacity: 1; } to { transform: translateX(100%); opacity: 0; } }
@keyframes shake {
    0%, 100% { transform: translateX(0); }
    10%, 30%, 50%, 70%, 90% { transform: translateX(-5px); }
    20%, 40%, 60%, 80% { transform: translateX(5px); }
}

.main-footer { padding: 2rem 0; text-align: center; color: var(--muted); border-top: 1px solid #e5e7eb; }
.main-footer a { color: var(--primary); }
"#;
