#[derive(Debug, Clone)]
pub enum AppEvent {
    SetValue(f64),
    ConfigReload,
}
