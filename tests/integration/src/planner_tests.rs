//! End-to-end planner scenarios over an in-memory backend
//!
//! These exercise the full decision ladder (build-file guard,
//! deletion guard, direct fast path, recompute fallback) the way a
//! watcher-driven build session would, with a stub standing in for
//! the build tool.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::path::PathBuf;

use pretty_assertions::assert_eq;
use tempfile::TempDir;

use buildsync_core::{
    BuildProfile, BuilderBackend, ChangeSet, Error, Project, Result, SyncEntry, SyncMap, SyncPlan,
    SyncState, init_sync, sync_diff,
};
use buildsync_fs::mod_time;

struct StubBackend {
    build_files: Vec<PathBuf>,
    results: RefCell<VecDeque<SyncMap>>,
    computes: Cell<usize>,
}

impl StubBackend {
    fn new(build_files: Vec<PathBuf>) -> Self {
        Self {
            build_files,
            results: RefCell::new(VecDeque::new()),
            computes: Cell::new(0),
        }
    }

    fn queue(&self, map: SyncMap) {
        self.results.borrow_mut().push_back(map);
    }

    fn computes(&self) -> usize {
        self.computes.get()
    }
}

impl BuilderBackend for StubBackend {
    fn build_definition_files(&self) -> Vec<PathBuf> {
        self.build_files.clone()
    }

    fn compute_sync_map(&self) -> Result<SyncMap> {
        self.computes.set(self.computes.get() + 1);
        self.results
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| Error::recompute("no sync map queued"))
    }
}

/// A scratch workspace with one direct file and one generated source,
/// mirroring a typical static-resources-plus-compiled-classes layout.
struct Workspace {
    dir: TempDir,
    static_file: PathBuf,
    source_file: PathBuf,
    build_file: PathBuf,
}

impl Workspace {
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let static_file = dir.path().join("A.txt");
        let source_file = dir.path().join("B.java");
        let build_file = dir.path().join("pom.xml");
        std::fs::write(&static_file, b"static content").unwrap();
        std::fs::write(&source_file, b"class B {}").unwrap();
        std::fs::write(&build_file, b"<project/>").unwrap();
        Self {
            dir,
            static_file,
            source_file,
            build_file,
        }
    }

    fn project(&self) -> Project {
        Project::new(self.dir.path(), BuildProfile::default())
    }

    /// Snapshot as the build tool would report it right now.
    fn current_map(&self) -> SyncMap {
        let mut map = SyncMap::new();
        map.insert(
            self.static_file.clone(),
            SyncEntry::direct(
                vec![PathBuf::from("/app/A.txt")],
                mod_time(&self.static_file).unwrap(),
            ),
        );
        map.insert(
            self.source_file.clone(),
            SyncEntry::generated(
                vec![PathBuf::from("/app/classes/B.class")],
                mod_time(&self.source_file).unwrap(),
            ),
        );
        map
    }
}

fn copied(plan: &SyncPlan) -> &std::collections::HashMap<PathBuf, Vec<PathBuf>> {
    match plan {
        SyncPlan::Copy { to_copy, to_delete } => {
            assert!(to_delete.is_empty());
            to_copy
        }
        SyncPlan::Rebuild => panic!("expected a copy plan, got a rebuild signal"),
    }
}

#[test]
fn edit_save_loop_on_a_static_file_never_rebuilds() {
    let ws = Workspace::new();
    let backend = StubBackend::new(vec![ws.build_file.clone()]);
    backend.queue(ws.current_map());

    let mut state = SyncState::new();
    let project = ws.project();
    init_sync(&mut state, &project, &backend).unwrap();

    for _ in 0..3 {
        std::fs::write(&ws.static_file, b"edited").unwrap();
        let changes = ChangeSet::modified_only([ws.static_file.clone()]);
        let plan = sync_diff(&mut state, &project, &backend, &changes).unwrap();

        let to_copy = copied(&plan);
        assert_eq!(to_copy.len(), 1);
        assert_eq!(to_copy[&ws.static_file], vec![PathBuf::from("/app/A.txt")]);
    }

    // Only the initial snapshot computation ever ran the build tool.
    assert_eq!(backend.computes(), 1);
}

#[test]
fn editing_a_source_file_triggers_recomputation() {
    let ws = Workspace::new();
    let backend = StubBackend::new(vec![ws.build_file.clone()]);
    backend.queue(ws.current_map());

    let mut state = SyncState::new();
    let project = ws.project();
    init_sync(&mut state, &project, &backend).unwrap();

    // The compiler reruns, so the recomputed map carries a new mod
    // time for the source.
    std::thread::sleep(std::time::Duration::from_millis(1100));
    std::fs::write(&ws.source_file, b"class B { int x; }").unwrap();
    backend.queue(ws.current_map());

    let changes = ChangeSet::modified_only([ws.source_file.clone()]);
    let plan = sync_diff(&mut state, &project, &backend, &changes).unwrap();

    let to_copy = copied(&plan);
    assert_eq!(to_copy.len(), 1);
    assert_eq!(
        to_copy[&ws.source_file],
        vec![PathBuf::from("/app/classes/B.class")]
    );
    assert_eq!(backend.computes(), 2);
}

#[test]
fn build_definition_change_always_signals_rebuild() {
    let ws = Workspace::new();
    let backend = StubBackend::new(vec![ws.build_file.clone()]);
    backend.queue(ws.current_map());

    let mut state = SyncState::new();
    let project = ws.project();
    init_sync(&mut state, &project, &backend).unwrap();

    // Even bundled with an otherwise fast-pathable edit.
    let changes = ChangeSet::modified_only([ws.static_file.clone(), ws.build_file.clone()]);
    let plan = sync_diff(&mut state, &project, &backend, &changes).unwrap();

    assert_eq!(plan, SyncPlan::Rebuild);
    assert_eq!(backend.computes(), 1);
}

#[test]
fn deletions_always_signal_rebuild() {
    let ws = Workspace::new();
    let backend = StubBackend::new(vec![ws.build_file.clone()]);
    backend.queue(ws.current_map());

    let mut state = SyncState::new();
    let project = ws.project();
    init_sync(&mut state, &project, &backend).unwrap();

    let changes = ChangeSet {
        deleted: vec![ws.static_file.clone()],
        ..ChangeSet::default()
    };
    let plan = sync_diff(&mut state, &project, &backend, &changes).unwrap();

    assert_eq!(plan, SyncPlan::Rebuild);
    assert_eq!(backend.computes(), 1);
}

#[test]
fn two_projects_track_independent_snapshots() {
    let ws_a = Workspace::new();
    let ws_b = Workspace::new();

    let backend_a = StubBackend::new(vec![ws_a.build_file.clone()]);
    backend_a.queue(ws_a.current_map());
    let backend_b = StubBackend::new(vec![ws_b.build_file.clone()]);
    backend_b.queue(ws_b.current_map());

    let mut state = SyncState::new();
    let project_a = ws_a.project();
    let project_b = ws_b.project();

    init_sync(&mut state, &project_a, &backend_a).unwrap();
    init_sync(&mut state, &project_b, &backend_b).unwrap();

    // A fast-path sync in project A leaves project B's snapshot alone.
    let changes = ChangeSet::modified_only([ws_a.static_file.clone()]);
    let plan = sync_diff(&mut state, &project_a, &backend_a, &changes).unwrap();
    assert_eq!(copied(&plan).len(), 1);

    assert_eq!(state.get(&project_b.key()).len(), 2);
    assert_eq!(backend_b.computes(), 1);
}

#[test]
fn failed_recomputation_keeps_the_previous_baseline_usable() {
    let ws = Workspace::new();
    let backend = StubBackend::new(vec![ws.build_file.clone()]);
    backend.queue(ws.current_map());

    let mut state = SyncState::new();
    let project = ws.project();
    init_sync(&mut state, &project, &backend).unwrap();

    // Build tool breaks: nothing queued for the recomputation.
    let changes = ChangeSet::modified_only([ws.source_file.clone()]);
    assert!(sync_diff(&mut state, &project, &backend, &changes).is_err());

    // The direct fast path still works off the intact baseline.
    let changes = ChangeSet::modified_only([ws.static_file.clone()]);
    let plan = sync_diff(&mut state, &project, &backend, &changes).unwrap();
    assert_eq!(copied(&plan).len(), 1);
}
