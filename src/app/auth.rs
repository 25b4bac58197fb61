//! Authentication slice.
//!
//! Credentials and sign-in screens are handled by the external auth service;
//! this slice only records the outcome so favorites know who is signed in.

use crate::domain::User;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthAction {
    LoginStart,
    LoginSuccess(User),
    LoginFailure(String),
    Logout,
}

impl AuthState {
    /// Applies `action`, returning whether the state changed.
    pub fn reduce(&mut self, action: &AuthAction) -> bool {
        let before = self.clone();
        match action {
            AuthAction::LoginStart => {
                self.loading = true;
                self.error = None;
            }
            AuthAction::LoginSuccess(user) => {
                self.loading = false;
                self.user = Some(user.clone());
            }
            AuthAction::LoginFailure(message) => {
                self.loading = false;
                self.error = Some(message.clone());
            }
            AuthAction::Logout => {
                self.user = None;
                self.error = None;
            }
        }
        *self != before
    }
}
