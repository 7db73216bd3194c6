// Tests for the tracing feature
// Runs map operations under a recording subscriber and checks the spans and
// events they emit

#![allow(clippy::unwrap_used)]

use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use textmap::{Entry, MapConfig, Result, StringMap};
use tracing::span::{Attributes, Id, Record};
use tracing::{Event, Level, Metadata, Subscriber};

#[derive(Default)]
struct Recorded {
    spans:    Mutex<Vec<&'static str>>,
    warnings: AtomicUsize,
    events:   AtomicUsize,
    next_id:  AtomicU64,
}

struct Recorder(Arc<Recorded>);

impl Subscriber for Recorder {
    fn enabled(&self, _: &Metadata<'_>) -> bool {
        true
    }

    fn new_span(&self, attributes: &Attributes<'_>) -> Id {
        self.0.spans.lock().unwrap().push(attributes.metadata().name());
        Id::from_u64(self.0.next_id.fetch_add(1, Ordering::Relaxed) + 1)
    }

    fn record(&self, _: &Id, _: &Record<'_>) {}

    fn record_follows_from(&self, _: &Id, _: &Id) {}

    fn event(&self, event: &Event<'_>) {
        self.0.events.fetch_add(1, Ordering::Relaxed);
        if *event.metadata().level() == Level::WARN {
            self.0.warnings.fetch_add(1, Ordering::Relaxed);
        }
    }

    fn enter(&self, _: &Id) {}

    fn exit(&self, _: &Id) {}
}

fn recorded<T>(operations: impl FnOnce() -> T) -> (T, Arc<Recorded>) {
    let recorded = Arc::new(Recorded::default());
    let result = tracing::subscriber::with_default(Recorder(Arc::clone(&recorded)), operations);
    (result, recorded)
}

#[test]
fn test_lifecycle_emits_spans() -> Result<()> {
    let (result, recorded) = recorded(|| -> Result<()> {
        let mut map = StringMap::with_config(MapConfig::new().with_initial_capacity(1))?;
        map.put("a", "1")?;
        map.put("b", "2")?;
        let copy = map.try_clone()?;
        map.remove("a")?;
        map.clear();
        assert_eq!(copy.len(), 2);
        Ok(())
    });
    result?;

    let spans = recorded.spans.lock().unwrap();
    for name in ["map_grow", "map_copy", "map_clear"] {
        assert!(spans.contains(&name), "no {name} span in {spans:?}");
    }
    assert!(recorded.events.load(Ordering::Relaxed) > 0);
    assert_eq!(recorded.warnings.load(Ordering::Relaxed), 0);
    Ok(())
}

#[test]
fn test_budget_refusal_warns() -> Result<()> {
    // Two slots and text for exactly two one-letter pairs.
    let config = MapConfig::new()
        .with_initial_capacity(1)
        .with_byte_budget(2 * Entry::SLOT_BYTES + 8);

    let (result, recorded) = recorded(|| -> Result<StringMap> {
        let mut map = StringMap::with_config(config)?;
        map.put("a", "1")?;
        map.put("b", "2")?;
        assert!(map.put("c", "3").is_err());
        Ok(map)
    });
    let map = result?;

    assert_eq!(map.len(), 2);
    assert_eq!(recorded.warnings.load(Ordering::Relaxed), 1);
    Ok(())
}
