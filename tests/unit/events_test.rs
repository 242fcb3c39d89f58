//! Tests for event sinks

use std::sync::Arc;

use hotel_sim::core::{EventSink, HotelEvent, InMemoryEventSink, TracingEventSink};

#[test]
fn test_sinks_are_object_safe() {
    let sinks: Vec<Arc<dyn EventSink>> = vec![
        Arc::new(TracingEventSink),
        Arc::new(InMemoryEventSink::new(4)),
    ];
    for sink in &sinks {
        sink.record(HotelEvent::GuestArrived {
            guest: "Guest-1".to_string(),
        });
    }
}

#[test]
fn test_no_room_narration() {
    let event = HotelEvent::NoRoomForGuest {
        receptionist: "Receptionist-2".to_string(),
        guest: "Guest-4".to_string(),
    };
    assert_eq!(
        event.to_string(),
        "Receptionist-2 found no room for Guest-4, they will have to wait"
    );
}

#[test]
fn test_event_json_round_trip() {
    let event = HotelEvent::CheckedIn {
        guest: "Guest-1".to_string(),
        room: 3,
        receptionist: None,
    };
    let json = serde_json::to_string(&event).unwrap();
    assert_eq!(serde_json::from_str::<HotelEvent>(&json).unwrap(), event);
}
