use partial_digest::engine::config as core_config;

pub struct AppConfig {
    pub core_config: core_config::SolveConfig,
    pub show_progress: bool,
}
