use lex_config::LexConfig;
use lex_store::PageStore;
use lex_sync::MenuSyncService;

/// Resolved configuration and the stores built from it.
pub struct AppContext {
    pub config: LexConfig,
    pub menu: MenuSyncService,
    pub pages: PageStore,
}

impl AppContext {
    pub fn new(config: LexConfig) -> Self {
        let menu = MenuSyncService::new(&config.site);
        let pages = PageStore::new(config.site.root_dir());
        Self {
            config,
            menu,
            pages,
        }
    }
}
