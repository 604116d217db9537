use {prometheus_metric_storage::StorageRegistry, std::sync::OnceLock};

/// Metrics for bridge operations.
#[derive(Debug, Clone, prometheus_metric_storage::MetricStorage)]
#[metric(subsystem = "bridge")]
struct Metrics {
    /// Operations invoked, per action and phase.
    #[metric(labels("action", "phase"))]
    invocations: prometheus::IntCounterVec,

    /// Operations that completed, per action, phase and outcome.
    #[metric(labels("action", "phase", "outcome"))]
    completions: prometheus::IntCounterVec,
}

pub fn invoked(action: &str, phase: &str) {
    get().invocations.with_label_values(&[action, phase]).inc();
}

pub fn completed(action: &str, phase: &str, outcome: &str) {
    get()
        .completions
        .with_label_values(&[action, phase, outcome])
        .inc();
}

/// The registry all bridge metrics are registered in.
pub fn registry() -> &'static prometheus::Registry {
    storage().registry()
}

fn storage() -> &'static StorageRegistry {
    static STORAGE: OnceLock<StorageRegistry> = OnceLock::new();
    STORAGE.get_or_init(|| StorageRegistry::new(prometheus::Registry::new()))
}

/// Get the metrics instance.
fn get() -> &'static Metrics {
    Metrics::instance(storage()).expect("unexpected error getting metrics instance")
}
