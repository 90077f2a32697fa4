use notch_core::SystemSnapshot;
use std::time::Duration;
use sysinfo::{CpuRefreshKind, MemoryRefreshKind, RefreshKind, System};
use tokio::sync::mpsc;
use tokio::time;

/// Spawn a background Tokio task that polls CPU and memory every `interval_ms`
/// milliseconds and forwards [`SystemSnapshot`]s through the returned channel.
///
/// The task stops automatically when the receiver is dropped.
pub fn spawn_monitor(interval_ms: u64) -> mpsc::Receiver<SystemSnapshot> {
    let (tx, rx) = mpsc::channel(4);
    // CPU usage is a delta between refreshes; sysinfo needs at least this long.
    let interval = Duration::from_millis(interval_ms).max(sysinfo::MINIMUM_CPU_UPDATE_INTERVAL);

    tokio::spawn(async move {
        let mut sys = System::new_with_specifics(
            RefreshKind::nothing()
                .with_cpu(CpuRefreshKind::nothing().with_cpu_usage())
                .with_memory(MemoryRefreshKind::nothing().with_ram()),
        );
        let mut ticker = time::interval(interval);

        loop {
            ticker.tick().await;
            sys.refresh_cpu_usage();
            sys.refresh_memory();

            if tx.send(take_snapshot(&sys)).await.is_err() {
                tracing::debug!("system monitor receiver dropped; stopping");
                break;
            }
        }
    });

    rx
}

fn take_snapshot(sys: &System) -> SystemSnapshot {
    SystemSnapshot {
        cpu_average: sys.global_cpu_usage(),
        ram_used:    sys.used_memory(),
        ram_total:   sys.total_memory(),
    }
}
