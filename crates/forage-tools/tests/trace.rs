use forage_core::{AgentId, Category, NodeId};
use forage_tools::{NullTraceSink, TraceEvent, TraceKind, TraceLog, TraceSink, VecTraceSink};

fn drained(tick: u64) -> TraceEvent {
    TraceEvent::new(tick, AgentId(1), TraceKind::NodeDrained { node: NodeId(3) })
}

#[test]
fn vec_sink_keeps_events_in_order() {
    let mut sink = VecTraceSink::default();
    sink.emit(drained(1));
    sink.emit(TraceEvent::new(
        2,
        AgentId(1),
        TraceKind::TokenCreated {
            node: NodeId(3),
            category: Category(7),
        },
    ));

    let tags: Vec<&str> = sink.events.iter().map(|e| e.kind.tag()).collect();
    assert_eq!(tags, vec!["node.drained", "token.created"]);
}

#[test]
fn boxed_sinks_forward_events() {
    let mut sink: Box<dyn TraceSink> = Box::new(TraceLog::default());
    sink.emit(drained(4));

    let mut null: Box<dyn TraceSink> = Box::new(NullTraceSink);
    null.emit(drained(5));
}

#[test]
fn trace_log_counts_by_tag() {
    let mut log = TraceLog::default();
    log.emit(drained(1));
    log.emit(drained(2));
    log.emit(TraceEvent::new(3, AgentId(1), TraceKind::BoundaryHit));

    assert_eq!(log.count("node.drained"), 2);
    assert_eq!(log.count("boundary.hit"), 1);
    assert_eq!(log.count("token.delivered"), 0);
}
