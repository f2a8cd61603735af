//! Failure provenance: capture the origin trace and trim the library's own frames from its
//! top so the failure appears to originate at the caller.
//!
//! Trimming is a prefix trim only. Scanning stops at the first frame that does not belong
//! to the library, even if library frames appear again further out (a caller that routes
//! through its own validation helper keeps those frames). This keeps the cost bounded by
//! the depth of the library's own call chain.

use vouch_types::{Frame, Trace};

/// Path segment that marks a frame as belonging to the library's self-tests. Such frames
/// are never trimmed, so a test calling a predicate directly sees itself on top.
const TEST_SEGMENT: &str = "::tests::";

/// Path prefix of the trace capture machinery itself.
const CAPTURE_PREFIX: &str = "backtrace::";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProvenanceCleaner {
    enabled: bool,
    prefixes: Vec<String>,
}

impl ProvenanceCleaner {
    pub fn new<I, S>(enabled: bool, prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            enabled,
            prefixes: prefixes.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Whether `frame` is one of the library's own frames.
    ///
    /// A frame matches a prefix `p` when its path is `p` followed by `::`, so `vouch` does
    /// not claim `vouchsafe::run`.
    pub fn is_library_frame(&self, frame: &Frame) -> bool {
        let path = frame.path();
        if path.contains(TEST_SEGMENT) {
            return false;
        }
        self.prefixes.iter().any(|prefix| {
            path.strip_prefix(prefix.as_str())
                .is_some_and(|rest| rest.starts_with("::"))
        })
    }

    /// Remove the maximal prefix of library frames. No-op when cleaning is disabled.
    pub fn clean(&self, trace: &mut Trace) {
        if !self.enabled {
            return;
        }
        let cut = trace
            .frames()
            .iter()
            .position(|frame| !self.is_library_frame(frame))
            .unwrap_or(trace.len());
        trace.trim_front(cut);
    }
}

/// Capture the current call stack, innermost frame first, with the leading library frames
/// already trimmed by `cleaner`.
///
/// The stack is walked unresolved and each frame's symbols are resolved one at a time, so
/// the capture machinery and the library prefix are dropped as they are scanned. Inlined
/// functions contribute one frame per resolved symbol. Frames without a symbol name are
/// dropped.
pub fn capture(cleaner: &ProvenanceCleaner) -> Trace {
    let backtrace = backtrace::Backtrace::new_unresolved();
    let mut frames = Vec::new();
    let mut in_machinery = true;
    let mut in_library = cleaner.is_enabled();

    for raw in backtrace.frames() {
        backtrace::resolve(raw.ip(), |symbol| {
            let Some(name) = symbol.name() else {
                return;
            };
            let frame = Frame {
                symbol: format!("{name:#}"),
                file: symbol.filename().map(|p| p.display().to_string()),
                line: symbol.lineno(),
            };
            if in_machinery && frame.path().starts_with(CAPTURE_PREFIX) {
                return;
            }
            in_machinery = false;
            if in_library && cleaner.is_library_frame(&frame) {
                return;
            }
            in_library = false;
            frames.push(frame);
        });
    }
    Trace::new(frames)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::LIBRARY_PREFIXES;
    use crate::test_support::trace_of;

    fn cleaner() -> ProvenanceCleaner {
        ProvenanceCleaner::new(true, LIBRARY_PREFIXES.iter().copied())
    }

    #[test]
    fn trims_only_the_leading_library_frames() {
        let mut trace = trace_of(&[
            "vouch_domain::failure::FailureFactory::build",
            "vouch_domain::check::Check<T>::evaluate",
            "<vouch_domain::checks::text::TextCheck as vouch_domain::checks::Measured>::is_not_empty",
            "app::handlers::create_user",
            "app::main",
            "vouch::load_validator",
        ]);

        cleaner().clean(&mut trace);

        let symbols: Vec<&str> = trace.frames().iter().map(|f| f.symbol.as_str()).collect();
        assert_eq!(
            symbols,
            vec!["app::handlers::create_user", "app::main", "vouch::load_validator"]
        );
    }

    #[test]
    fn disabled_cleaner_preserves_the_raw_trace() {
        let raw = trace_of(&["vouch_domain::check::Check<T>::evaluate", "app::main"]);
        let mut trace = raw.clone();
        ProvenanceCleaner::new(false, LIBRARY_PREFIXES.iter().copied()).clean(&mut trace);
        assert_eq!(trace, raw);
    }

    #[test]
    fn self_test_frames_are_not_library_frames() {
        let cleaner = cleaner();
        assert!(!cleaner.is_library_frame(&Frame::new(
            "vouch_domain::checks::tests::text_predicates"
        )));
        assert!(cleaner.is_library_frame(&Frame::new("vouch_domain::checks::text::TextCheck::starts_with")));
    }

    #[test]
    fn prefix_must_end_at_a_path_separator() {
        let cleaner = cleaner();
        assert!(!cleaner.is_library_frame(&Frame::new("vouchsafe::run")));
        assert!(!cleaner.is_library_frame(&Frame::new("vouch_domainish::run")));
        assert!(cleaner.is_library_frame(&Frame::new("vouch::load_validator")));
    }

    #[test]
    fn all_library_frames_are_removed_entirely() {
        let mut trace = trace_of(&["vouch_format::render", "vouch_domain::check::Check<T>::evaluate"]);
        cleaner().clean(&mut trace);
        assert!(trace.is_empty());
    }

    #[test]
    fn capture_starts_past_the_capture_machinery() {
        let trace = capture(&ProvenanceCleaner::new(false, Vec::<String>::new()));
        assert!(
            trace
                .frames()
                .iter()
                .all(|frame| !frame.path().starts_with(CAPTURE_PREFIX)),
            "capture frames leaked into the trace:\n{trace}"
        );
        let top = trace.top().expect("trace has frames");
        assert!(top.path().starts_with("vouch_domain::"), "unexpected top frame:\n{trace}");
    }

    #[test]
    fn capture_trims_library_frames_while_resolving() {
        let trace = capture(&cleaner());
        let top = trace.top().expect("trace has frames");
        assert!(
            top.path().contains("::tests::capture_trims_library_frames_while_resolving"),
            "unexpected top frame:\n{trace}"
        );
        assert!(trace.frames().iter().all(|frame| !frame.path().starts_with(CAPTURE_PREFIX)));
    }
}
