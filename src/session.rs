//! Session state
//!
//! Who is known, who is logged in and where they are. One session per
//! terminal instance; command handlers never mutate it directly, they
//! return a [`SessionPatch`] the controller applies.

use crate::vfs::VfsPath;

/// Name shown in the prompt while nobody is logged in
pub const ANONYMOUS_USER: &str = "guest";

#[derive(Clone, Debug)]
pub struct Session {
    /// Known usernames, in the order they were added
    pub users: Vec<String>,
    /// Current user; `None` means the anonymous visitor
    pub current_user: Option<String>,
    /// Always resolves to an existing directory
    pub cwd: VfsPath,
}

impl Session {
    pub fn new() -> Self {
        Self {
            users: Vec::new(),
            current_user: None,
            cwd: VfsPath::root(),
        }
    }

    pub fn has_user(&self, name: &str) -> bool {
        self.users.iter().any(|u| u == name)
    }

    /// Username rendered in the prompt
    pub fn user_display(&self) -> &str {
        self.current_user.as_deref().unwrap_or(ANONYMOUS_USER)
    }

    /// Merge a patch. A login for an unknown name is dropped so the
    /// current user always exists in `users`.
    pub fn apply(&mut self, patch: SessionPatch) {
        if let Some(name) = patch.add_user {
            if !self.has_user(&name) {
                self.users.push(name);
            }
        }
        if let Some(name) = patch.login {
            if self.has_user(&name) {
                self.current_user = Some(name);
            }
        }
        if patch.logout {
            self.current_user = None;
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Partial session update described by a command handler
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionPatch {
    pub add_user: Option<String>,
    pub login: Option<String>,
    pub logout: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_login() {
        let mut session = Session::new();
        session.apply(SessionPatch {
            add_user: Some(String::from("owen")),
            login: Some(String::from("owen")),
            logout: false,
        });
        assert_eq!(session.users, vec!["owen"]);
        assert_eq!(session.user_display(), "owen");
    }

    #[test]
    fn test_logout_restores_anonymous() {
        let mut session = Session::new();
        session.apply(SessionPatch {
            add_user: Some(String::from("owen")),
            login: Some(String::from("owen")),
            logout: false,
        });
        session.apply(SessionPatch {
            logout: true,
            ..Default::default()
        });
        assert_eq!(session.current_user, None);
        assert_eq!(session.user_display(), ANONYMOUS_USER);
        // the user stays known
        assert!(session.has_user("owen"));
    }

    #[test]
    fn test_login_unknown_user_is_dropped() {
        let mut session = Session::new();
        session.apply(SessionPatch {
            login: Some(String::from("ghost")),
            ..Default::default()
        });
        assert_eq!(session.current_user, None);
    }

    #[test]
    fn test_duplicate_add_keeps_one_entry() {
        let mut session = Session::new();
        for _ in 0..2 {
            session.apply(SessionPatch {
                add_user: Some(String::from("owen")),
                ..Default::default()
            });
        }
        assert_eq!(session.users.len(), 1);
    }
}
