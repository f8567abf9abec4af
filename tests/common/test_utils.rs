use std::sync::Mutex;

use log::{Level, LevelFilter, Log, Metadata, Record};
use scene_ex::{Instance, NodeId, SceneGraph, Vector3};

pub(crate) const EPSILON: f32 = 1e-4;

pub(crate) fn assert_vec3_close(actual: Vector3<f32>, expected: Vector3<f32>) {
    let diff = actual - expected;
    assert!(
        diff.x.abs() < EPSILON && diff.y.abs() < EPSILON && diff.z.abs() < EPSILON,
        "expected {:?}, got {:?}",
        expected,
        actual
    );
}

/// Compares two transforms; `q` and `-q` describe the same rotation.
pub(crate) fn assert_instance_close(actual: &Instance, expected: &Instance) {
    assert_vec3_close(actual.position, expected.position);
    assert_vec3_close(actual.scale, expected.scale);
    let same = (actual.rotation.s - expected.rotation.s).abs() < EPSILON
        && (actual.rotation.v - expected.rotation.v).x.abs() < EPSILON
        && (actual.rotation.v - expected.rotation.v).y.abs() < EPSILON
        && (actual.rotation.v - expected.rotation.v).z.abs() < EPSILON;
    let flipped = (actual.rotation.s + expected.rotation.s).abs() < EPSILON
        && (actual.rotation.v + expected.rotation.v).x.abs() < EPSILON
        && (actual.rotation.v + expected.rotation.v).y.abs() < EPSILON
        && (actual.rotation.v + expected.rotation.v).z.abs() < EPSILON;
    assert!(
        same || flipped,
        "expected rotation {:?}, got {:?}",
        expected.rotation,
        actual.rotation
    );
}

/// A root with three children named `A`, `B` and `C`, in that order.
pub(crate) struct Family {
    pub graph: SceneGraph,
    pub root: NodeId,
    pub a: NodeId,
    pub b: NodeId,
    pub c: NodeId,
}

impl Family {
    pub fn new() -> Self {
        Self::with_graph(SceneGraph::new())
    }

    pub fn with_graph(mut graph: SceneGraph) -> Self {
        scene_ex::init_logger();
        let root = graph.spawn("root");
        let a = graph.spawn("A");
        let b = graph.spawn("B");
        let c = graph.spawn("C");
        for child in [a, b, c] {
            scene_ex::hierarchy::add(&mut graph, root, child).unwrap();
        }
        Self {
            graph,
            root,
            a,
            b,
            c,
        }
    }
}

static CAPTURED: Mutex<Vec<(Level, String)>> = Mutex::new(Vec::new());

/// Keeps every log record in memory so tests can assert on diagnostics.
struct CaptureLogger;

impl Log for CaptureLogger {
    fn enabled(&self, _: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        if let Ok(mut captured) = CAPTURED.lock() {
            captured.push((record.level(), record.args().to_string()));
        }
    }

    fn flush(&self) {}
}

static CAPTURE_LOGGER: CaptureLogger = CaptureLogger;

/// Installs the capturing logger. Only one logger can exist per test binary,
/// so binaries using this must not call `scene_ex::init_logger`.
pub(crate) fn capture_logs() {
    let _ = log::set_logger(&CAPTURE_LOGGER);
    log::set_max_level(LevelFilter::Trace);
}

pub(crate) fn logged(level: Level, text: &str) -> bool {
    CAPTURED
        .lock()
        .map(|captured| {
            captured
                .iter()
                .any(|(l, message)| *l == level && message.contains(text))
        })
        .unwrap_or(false)
}
