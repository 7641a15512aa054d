use crate::flags::cache::Clock;
use crate::flags::provider::FlagProvider;
use crate::services::flags::FlagService;
use anyhow::Result;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

const TTL: Duration = Duration::from_secs(30);

// --- Manual Mock: Clock ---
// time only moves when a test says so
#[derive(Clone)]
pub struct ManualClock {
    now: Arc<Mutex<Instant>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            now: Arc::new(Mutex::new(Instant::now())),
        }
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap();
        *now += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        *self.now.lock().unwrap()
    }
}

// --- Manual Mock: FlagProvider ---
// answers with a fixed value (or fails when there isn't one) and counts
// how often the service actually reached out
#[derive(Clone)]
pub struct MockFlagProvider {
    pub value: Arc<Mutex<Option<bool>>>,
    pub call_count: Arc<Mutex<usize>>,
    pub last_visitor: Arc<Mutex<Option<String>>>,
}

impl MockFlagProvider {
    pub fn returning(value: bool) -> Self {
        Self {
            value: Arc::new(Mutex::new(Some(value))),
            call_count: Arc::new(Mutex::new(0)),
            last_visitor: Arc::new(Mutex::new(None)),
        }
    }

    pub fn failing() -> Self {
        Self {
            value: Arc::new(Mutex::new(None)),
            call_count: Arc::new(Mutex::new(0)),
            last_visitor: Arc::new(Mutex::new(None)),
        }
    }

    pub fn calls(&self) -> usize {
        *self.call_count.lock().unwrap()
    }
}

#[async_trait]
impl FlagProvider for MockFlagProvider {
    async fn evaluate(&self, _key: &str, visitor_id: &str) -> Result<bool> {
        *self.call_count.lock().unwrap() += 1;
        *self.last_visitor.lock().unwrap() = Some(visitor_id.to_string());

        let value = *self.value.lock().unwrap();
        value.ok_or_else(|| anyhow::anyhow!("Simulated provider outage"))
    }
}

fn service_with(provider: &MockFlagProvider, clock: &ManualClock) -> FlagService {
    FlagService::new(Box::new(provider.clone()), Box::new(clock.clone()), TTL)
}

// two evaluations inside the window cost one provider round-trip
#[tokio::test]
async fn test_second_call_within_ttl_is_served_from_cache() {
    let provider = MockFlagProvider::returning(true);
    let clock = ManualClock::new();
    let service = service_with(&provider, &clock);

    assert!(service.evaluate_flag("mail_animation_enabled").await);
    clock.advance(Duration::from_secs(10));
    assert!(service.evaluate_flag("mail_animation_enabled").await);

    assert_eq!(provider.calls(), 1);
}

// the provider can turn things off; false is a value, not a failure
#[tokio::test]
async fn test_provider_disable_is_respected() {
    let provider = MockFlagProvider::returning(false);
    let clock = ManualClock::new();
    let service = service_with(&provider, &clock);

    assert!(!service.evaluate_flag("twitter_widget_enabled").await);
}

// a dead provider never surfaces as an error, and the fallback is cached so
// we don't hammer it inside the window
#[tokio::test]
async fn test_provider_failure_falls_back_and_caches() {
    let provider = MockFlagProvider::failing();
    let clock = ManualClock::new();
    let service = service_with(&provider, &clock);

    assert!(service.evaluate_flag("substack_widget_enabled").await);
    assert!(service.evaluate_flag("substack_widget_enabled").await);

    // the second call must not have retried
    assert_eq!(provider.calls(), 1);
}

// once the window lapses the provider gets another chance
#[tokio::test]
async fn test_ttl_expiry_reevaluates() {
    let provider = MockFlagProvider::failing();
    let clock = ManualClock::new();
    let service = service_with(&provider, &clock);

    assert!(service.evaluate_flag("text_flip_animation_enabled").await);
    clock.advance(TTL);
    assert!(service.evaluate_flag("text_flip_animation_enabled").await);

    assert_eq!(provider.calls(), 2);
}

// the provider recovering is picked up at the next natural re-evaluation
#[tokio::test]
async fn test_recovered_provider_value_replaces_fallback() {
    let provider = MockFlagProvider::failing();
    let clock = ManualClock::new();
    let service = service_with(&provider, &clock);

    assert!(service.evaluate_flag("twitter_widget_enabled").await);

    // provider comes back up, this time saying "off"
    *provider.value.lock().unwrap() = Some(false);
    clock.advance(TTL);

    assert!(!service.evaluate_flag("twitter_widget_enabled").await);
}

// flags nobody has registered still default to showing content
#[tokio::test]
async fn test_unknown_key_defaults_to_enabled() {
    let provider = MockFlagProvider::failing();
    let clock = ManualClock::new();
    let service = service_with(&provider, &clock);

    assert!(service.evaluate_flag("some_future_widget_enabled").await);
}

// every evaluation identifies as the one synthetic visitor
#[tokio::test]
async fn test_visitor_identity_is_fixed() {
    let provider = MockFlagProvider::returning(true);
    let clock = ManualClock::new();
    let service = service_with(&provider, &clock);

    service.evaluate_flag("mail_animation_enabled").await;

    assert_eq!(
        provider.last_visitor.lock().unwrap().as_deref(),
        Some("website-visitor")
    );
}

#[tokio::test]
async fn test_clear_cache_forces_reevaluation() {
    let provider = MockFlagProvider::returning(true);
    let clock = ManualClock::new();
    let service = service_with(&provider, &clock);

    service.evaluate_flag("mail_animation_enabled").await;
    service.clear_cache().await;
    service.evaluate_flag("mail_animation_enabled").await;

    assert_eq!(provider.calls(), 2);
}

#[tokio::test]
async fn test_cached_flags_reports_live_values() {
    let provider = MockFlagProvider::returning(true);
    let clock = ManualClock::new();
    let service = service_with(&provider, &clock);

    assert!(service.cached_flags().await.is_empty());

    service.evaluate_flag("mail_animation_enabled").await;
    let cached = service.cached_flags().await;
    assert_eq!(cached.get("mail_animation_enabled"), Some(&true));

    // expired entries drop back out of the snapshot
    clock.advance(TTL);
    assert!(service.cached_flags().await.is_empty());
}
