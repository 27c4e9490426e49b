use lexis_core::VocabularySession;

pub struct AppState {
    pub session: VocabularySession,
    /// Name every menu action applies to
    pub user: String,
}

impl AppState {
    /// Registers `user` so its vocabulary is loaded before the first action
    pub fn new(mut session: VocabularySession, user: String) -> Self {
        session.register_user(&user);
        Self { session, user }
    }

    pub fn switch_user(&mut self, user: String) {
        self.session.register_user(&user);
        tracing::info!("Switched from {} to {}", self.user, user);
        self.user = user;
    }

    /// (learned, total) for the current user
    pub fn progress(&self) -> (usize, usize) {
        self.session
            .user(&self.user)
            .map(|v| v.progress())
            .unwrap_or_default()
    }
}
