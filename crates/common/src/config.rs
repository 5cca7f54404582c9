use once_cell::sync::OnceCell;

static CONFIG: OnceCell<GlobalConfig> = OnceCell::new();

#[derive(Debug)]
pub struct GlobalConfig {
    pub verbose: bool,
}

pub fn init_global_config(config: GlobalConfig) {
    CONFIG.set(config).expect("Global config already initialized");
}

pub fn global_config() -> &'static GlobalConfig {
    CONFIG.get().expect("Global config is not initialized")
}
