/// Something shown for a while and then taken down by a timer or by the user.
///
/// Every `show` hands out a fresh token. Timers carry the token they were
/// started with, so a timer that fires after the thing was closed or replaced
/// does nothing.
#[derive(Clone, Debug, PartialEq)]
pub struct Dismissible<T = ()> {
    current: Option<(u32, T)>,
    issued: u32,
}

impl<T> Default for Dismissible<T> {
    fn default() -> Self {
        Self {
            current: None,
            issued: 0,
        }
    }
}

impl<T> Dismissible<T> {
    /// Replaces whatever is showing and returns the new token.
    pub fn show(&mut self, payload: T) -> u32 {
        self.issued = self.issued.wrapping_add(1);
        self.current = Some((self.issued, payload));
        self.issued
    }

    /// Takes the current item down if `token` still refers to it.
    pub fn dismiss(&mut self, token: u32) -> bool {
        if self.token() == Some(token) {
            self.current = None;
            true
        } else {
            false
        }
    }

    pub fn close(&mut self) {
        self.current = None;
    }

    pub fn token(&self) -> Option<u32> {
        self.current.as_ref().map(|(token, _)| *token)
    }

    pub fn payload(&self) -> Option<&T> {
        self.current.as_ref().map(|(_, payload)| payload)
    }

    pub fn is_visible(&self) -> bool {
        self.current.is_some()
    }
}
