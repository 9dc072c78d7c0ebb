pub struct DefaultsConfig {
    pub max_expansions: Option<u64>,
    pub validate_shape: bool,
    pub verify_solution: bool,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            max_expansions: None,
            validate_shape: true,
            verify_solution: true,
        }
    }
}
