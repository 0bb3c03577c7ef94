//! Animated Counters Component
//!
//! Landing page statistics counting up from zero. The animation runs as a
//! local task owned by a [`CounterTask`] handle, cancelled when the
//! component is torn down.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use lost_found_core::counter::{CounterAnimation, CounterTiming};
use lost_found_core::AppConfig;

/// Handle to a running counter animation
#[derive(Clone, Default)]
struct CounterTask {
    cancelled: Arc<AtomicBool>,
}

impl CounterTask {
    /// Start ticking `anim` into `on_tick` after the configured delay
    fn spawn<const N: usize>(
        mut anim: CounterAnimation<N>,
        timing: CounterTiming,
        on_tick: impl Fn([u64; N]) + 'static,
    ) -> Self {
        let task = Self::default();
        let cancelled = task.cancelled.clone();
        spawn_local(async move {
            TimeoutFuture::new(timing.start_delay_ms).await;
            while !anim.is_finished() {
                if cancelled.load(Ordering::Relaxed) {
                    return;
                }
                on_tick(anim.tick());
                TimeoutFuture::new(timing.step_ms()).await;
            }
        });
        task
    }

    fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }
}

fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[component]
pub fn AnimatedCounters() -> impl IntoView {
    let config = expect_context::<AppConfig>();
    let targets = config.landing;
    let (values, set_values) = signal([0u64; 3]);

    let task = CounterTask::spawn(
        CounterAnimation::new(
            [targets.total_items, targets.items_claimed, targets.success_rate],
            &config.counter,
        ),
        config.counter,
        move |next| {
            let _ = set_values.try_set(next);
        },
    );
    on_cleanup(move || task.cancel());

    let stat = move |index: usize, label: &'static str, suffix: &'static str| {
        view! {
            <div class="stat-card">
                <div class="stat-value">{move || format!("{}{}", format_count(values.get()[index]), suffix)}</div>
                <div class="stat-label">{label}</div>
            </div>
        }
    };

    view! {
        <div class="stats-grid">
            {stat(0, "Items Reported", "")}
            {stat(1, "Items Returned", "")}
            {stat(2, "Success Rate", "%")}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_count_groups_thousands() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(87), "87");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(2847), "2,847");
        assert_eq!(format_count(100_000), "100,000");
        assert_eq!(format_count(1_000_000), "1,000,000");
    }
}
