//! Everything a handler needs, built once at startup.

use lex_auth::Authenticator;
use lex_config::LexConfig;
use lex_store::PageStore;
use lex_sync::MenuSyncService;

pub struct AdminState {
    pub config: LexConfig,
    /// `None` when the auth section is incomplete; every protected route
    /// and login then fail.
    pub auth: Option<Authenticator>,
    pub menu: MenuSyncService,
    pub pages: PageStore,
}

impl AdminState {
    #[must_use]
    pub fn new(config: LexConfig) -> Self {
        let auth = Authenticator::from_config(&config.auth).ok();
        let menu = MenuSyncService::new(&config.site);
        let pages = PageStore::new(config.site.root_dir());
        Self {
            config,
            auth,
            menu,
            pages,
        }
    }
}
