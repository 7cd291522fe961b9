mod support;

use std::cell::RefCell;
use std::rc::Rc;

use carousel_core::carousel_model::prelude::*;
use carousel_core::{
    CarouselEngine, CarouselError, CarouselOptions, ConfigurationError,
    HookPhase, TransitionPhase,
};
use support::*;

fn init_engine(count: usize, options: CarouselOptions) -> CarouselEngine<RecordingHost> {
    let mut engine = CarouselEngine::new(RecordingHost::default(), HOLDER);
    engine.init(tiles(count), options).expect("init");
    engine
}

fn visible() -> TileAccessibility {
    TileAccessibility {
        visibility: Some(Visibility::Visible),
        tab_index: Some(-1),
        focused: false,
    }
}

fn hidden() -> TileAccessibility {
    TileAccessibility {
        visibility: Some(Visibility::Hidden),
        tab_index: Some(-1),
        focused: false,
    }
}

#[test]
fn single_tile_frames_step_one_tile_at_a_time() {
    let mut engine = init_engine(5, CarouselOptions::new());

    let snapshot = engine.snapshot().unwrap();
    assert_eq!(snapshot.index, 0);
    assert_eq!(snapshot.frame_count, 5);
    assert_eq!(snapshot.tile_delta, 0);
    assert!(!snapshot.prev_enabled);
    assert!(snapshot.next_enabled);
    assert_eq!(snapshot.current_frame, handles(0..1));
    assert_eq!(snapshot.visible_tiles().collect::<Vec<_>>(), handles(0..1));

    assert_eq!(engine.next().unwrap(), HOLDER);

    let snapshot = engine.snapshot().unwrap();
    assert_eq!(snapshot.index, 1);
    assert_eq!(snapshot.frame_index, 1);
    assert_eq!(snapshot.prev_index, Some(0));
    assert_eq!(snapshot.current_tile, tile(1));
    assert_eq!(snapshot.visible_tiles().collect::<Vec<_>>(), handles(1..2));
    assert!(snapshot.prev_enabled);
    assert!(snapshot.next_enabled);
    assert_eq!(snapshot.offset, 120.0);
}

#[test]
fn short_last_frame_reuses_tiles_and_focuses_new_tile() {
    let mut engine = init_engine(5, CarouselOptions::new().with_increment(2));

    let snapshot = engine.snapshot().unwrap();
    assert_eq!(snapshot.frame_count, 3);
    assert_eq!(snapshot.tile_delta, 1);

    engine.next().unwrap();
    let snapshot = engine.snapshot().unwrap();
    assert_eq!(snapshot.index, 2);
    assert_eq!(snapshot.current_frame, handles(2..4));

    engine.next().unwrap();
    let snapshot = engine.snapshot().unwrap();
    assert_eq!(snapshot.index, 3);
    assert_eq!(snapshot.frame_index, 2);
    assert_eq!(snapshot.current_frame, handles(3..5));
    assert_eq!(snapshot.current_tile, tile(4));
    assert!(snapshot.prev_enabled);
    assert!(!snapshot.next_enabled);
    assert_eq!(snapshot.visible_tiles().collect::<Vec<_>>(), handles(3..5));
    assert_eq!(engine.host().focused().last(), Some(&tile(4)));
}

#[test]
fn increment_larger_than_sequence_never_moves() {
    let mut engine = init_engine(3, CarouselOptions::new().with_increment(5));

    let snapshot = engine.snapshot().unwrap();
    assert_eq!(snapshot.frame_count, 1);
    assert_eq!(snapshot.tile_delta, 2);
    assert!(!snapshot.prev_enabled);
    assert!(!snapshot.next_enabled);
    assert_eq!(snapshot.current_frame, handles(0..3));

    engine.host_mut().take_calls();
    engine.next().unwrap();
    engine.prev().unwrap();

    let snapshot = engine.snapshot().unwrap();
    assert_eq!(snapshot.index, 0);
    assert_eq!(snapshot.current_tile, tile(2));
    assert_eq!(engine.host().focused(), vec![tile(2), tile(2)]);
    assert!(
        !engine
            .host()
            .calls
            .iter()
            .any(|call| matches!(call, Call::SwapControl(..)))
    );
}

#[test]
fn reset_returns_to_first_frame() {
    let mut engine = init_engine(6, CarouselOptions::new().with_increment(2));
    engine.next().unwrap();
    engine.next().unwrap();

    engine.reset().unwrap();

    let snapshot = engine.snapshot().unwrap();
    assert_eq!(snapshot.index, 0);
    assert_eq!(snapshot.prev_index, Some(4));
    assert_eq!(snapshot.prev_frame_index, 2);
    assert!(!snapshot.prev_enabled);
    assert!(snapshot.next_enabled);
    assert_eq!(engine.host().focused().last(), Some(&tile(0)));
}

#[test]
fn out_of_range_requests_are_clamped() {
    let mut engine = init_engine(6, CarouselOptions::new().with_increment(2));

    engine.advance(-5, true).unwrap();
    assert_eq!(engine.snapshot().unwrap().index, 0);

    engine.advance(99, true).unwrap();
    let snapshot = engine.snapshot().unwrap();
    assert_eq!(snapshot.index, 4);
    assert_eq!(snapshot.current_frame, handles(4..6));

    engine.next().unwrap();
    assert_eq!(engine.snapshot().unwrap().index, 4);
}

#[test]
fn navigating_to_the_same_index_keeps_state() {
    let mut engine = init_engine(6, CarouselOptions::new().with_increment(2));
    engine.advance(2, true).unwrap();
    let first = engine.snapshot().unwrap();

    engine.advance(2, true).unwrap();
    let second = engine.snapshot().unwrap();

    assert_eq!(second.index, first.index);
    assert_eq!(second.current_frame, first.current_frame);
    assert_eq!(second.tiles, first.tiles);
    assert_eq!(second.prev_index, Some(2));
}

#[test]
fn media_is_requested_once_per_tile() {
    let mut engine = CarouselEngine::new(RecordingHost::default(), HOLDER);
    engine
        .init(tiles_with_media(5), CarouselOptions::new().with_increment(2))
        .unwrap();
    assert_eq!(engine.host().loaded(), handles(0..2));

    engine.next().unwrap();
    assert_eq!(engine.host().loaded(), handles(0..4));

    engine.next().unwrap();
    engine.prev().unwrap();
    engine.prev().unwrap();
    engine.next().unwrap();

    assert_eq!(engine.host().loaded(), handles(0..5));
    assert!(engine.host().calls.contains(&Call::LoadMedia(
        tile(4),
        vec!["img-4.jpg".to_string()]
    )));
    assert!(
        engine
            .snapshot()
            .unwrap()
            .tiles
            .iter()
            .all(|tile| tile.media_requested)
    );
}

#[test]
fn init_builds_structure_in_order() {
    let engine = init_engine(3, CarouselOptions::new());

    let expected = vec![
        Call::Publish(LifecycleEvent::BeforeInit),
        Call::Wrap(HOLDER),
        Call::Accessibility(tile(0), hidden()),
        Call::Accessibility(tile(1), hidden()),
        Call::Accessibility(tile(2), hidden()),
        Call::Accessibility(tile(0), visible()),
        Call::ApplyLayout(
            handles(0..3),
            ContainerLayout {
                wrapper_margin: 0,
                viewport_margin: 0,
                viewport_width: 120.0,
                frame_width: 120.0,
                tile_width_percent: 100.0,
            },
        ),
        Call::InsertControls(ControlsSpec {
            prev_text: "Previous".into(),
            next_text: "Next".into(),
            placement: ControlsPlacement::BeforeWrapper,
            prev_enabled: false,
            next_enabled: true,
        }),
        Call::BindControls(REGION),
        Call::BindTileFocus(handles(0..3)),
        Call::Publish(LifecycleEvent::AfterInit),
    ];
    assert_eq!(engine.host().calls, expected);
}

#[test]
fn transition_runs_in_fixed_order() {
    let mut engine = init_engine(3, CarouselOptions::new());
    engine.host_mut().take_calls();

    engine.next().unwrap();

    let expected = vec![
        Call::Publish(LifecycleEvent::PreFrameChange),
        Call::SetBusy(true),
        Call::Accessibility(tile(1), visible()),
        Call::Accessibility(tile(2), visible()),
        Call::SwapControl(NavAction::PrevFrame, true),
        Call::Accessibility(tile(0), hidden()),
        Call::Accessibility(tile(1), hidden()),
        Call::Accessibility(tile(2), hidden()),
        Call::Accessibility(tile(1), visible()),
        Call::Focus(tile(1)),
        Call::SetBusy(false),
        Call::Publish(LifecycleEvent::PostFrameChange),
    ];
    assert_eq!(engine.host().calls, expected);
    assert_eq!(engine.phase(), TransitionPhase::Idle);
}

#[test]
fn encapsulated_controls_are_centered_under_viewport() {
    let engine = init_engine(
        4,
        CarouselOptions::new()
            .with_increment(2)
            .with_encapsulated_controls(true),
    );

    let calls = &engine.host().calls;
    assert!(calls.iter().any(|call| matches!(
        call,
        Call::InsertControls(spec) if spec.placement == ControlsPlacement::Encapsulated
    )));
    assert!(calls.contains(&Call::PositionControls(ControlsPosition {
        width: 60.0,
        left: 90.0,
    })));
}

#[test]
fn layout_applies_deltas() {
    let engine = init_engine(
        4,
        CarouselOptions::new().with_increment(2).with_deltas(5, "10px"),
    );

    let layout = engine.layout().copied().unwrap();
    assert_eq!(layout.frame_width, 240.0);
    assert_eq!(layout.viewport_width, 250.0);
    assert_eq!(layout.wrapper_margin, 5);
    assert_eq!(layout.viewport_margin, 10);
}

#[test]
fn hooks_observe_committed_state() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let pre_log = Rc::clone(&log);
    let post_log = Rc::clone(&log);

    let options = CarouselOptions::new()
        .on_pre_frame_change(move |snapshot: &StateSnapshot| {
            pre_log.borrow_mut().push(format!("pre:{}", snapshot.index));
            Ok(())
        })
        .on_post_frame_change(move |snapshot: &StateSnapshot| {
            post_log.borrow_mut().push(format!("post:{}", snapshot.index));
            Ok(())
        });
    let mut engine = init_engine(4, options);

    engine.next().unwrap();
    engine.advance(3, false).unwrap();

    assert_eq!(*log.borrow(), vec!["pre:1".to_string(), "post:1".to_string()]);
}

#[test]
fn failing_pre_hook_keeps_committed_state() {
    let options = CarouselOptions::new()
        .on_pre_frame_change(|_: &StateSnapshot| Err(anyhow::anyhow!("rejected")));
    let mut engine = init_engine(4, options);
    engine.host_mut().take_calls();

    let err = engine.next().unwrap_err();

    assert!(matches!(
        err,
        CarouselError::Hook {
            phase: HookPhase::PreFrameChange,
            ..
        }
    ));
    assert_eq!(engine.snapshot().unwrap().index, 1);
    assert_eq!(engine.phase(), TransitionPhase::Idle);
    assert_eq!(
        engine.host().calls,
        vec![Call::Publish(LifecycleEvent::PreFrameChange)]
    );
}

#[test]
fn failing_post_hook_reports_after_transition() {
    let options = CarouselOptions::new()
        .on_post_frame_change(|_: &StateSnapshot| Err(anyhow::anyhow!("late")));
    let mut engine = init_engine(4, options);
    engine.host_mut().take_calls();

    let err = engine.next().unwrap_err();

    assert!(matches!(
        err,
        CarouselError::Hook {
            phase: HookPhase::PostFrameChange,
            ..
        }
    ));
    let calls = &engine.host().calls;
    assert!(calls.contains(&Call::SetBusy(false)));
    assert!(calls.contains(&Call::Focus(tile(1))));
    assert_eq!(engine.phase(), TransitionPhase::Idle);
}

#[test]
fn second_init_is_ignored() {
    let mut engine = init_engine(4, CarouselOptions::new().with_increment(2));
    engine.next().unwrap();
    engine.host_mut().take_calls();

    engine
        .init(tiles(8), CarouselOptions::new().with_increment(1))
        .unwrap();

    assert!(engine.host().calls.is_empty());
    assert_eq!(engine.config().map(|config| config.increment), Some(2));
    assert_eq!(engine.snapshot().unwrap().index, 2);
}

#[test]
fn empty_sequence_is_rejected_before_side_effects() {
    let mut engine = CarouselEngine::new(RecordingHost::default(), HOLDER);

    let err = engine.init(Vec::new(), CarouselOptions::new()).unwrap_err();

    assert!(matches!(
        err,
        CarouselError::Configuration(ConfigurationError::EmptyTileSequence)
    ));
    assert!(!engine.is_initialized());
    assert!(engine.host().calls.is_empty());
}

#[test]
fn zero_width_tile_is_rejected() {
    let mut engine = CarouselEngine::new(RecordingHost::with_tile_metrics(0.0, 80.0), HOLDER);

    let err = engine.init(tiles(3), CarouselOptions::new()).unwrap_err();

    assert!(matches!(
        err,
        CarouselError::Configuration(ConfigurationError::ZeroTileWidth)
    ));
    assert!(engine.host().calls.is_empty());
}

#[test]
fn non_positive_increment_is_rejected() {
    let mut engine = CarouselEngine::new(RecordingHost::default(), HOLDER);

    let err = engine
        .init(tiles(3), CarouselOptions::new().with_increment("0"))
        .unwrap_err();

    assert!(matches!(
        err,
        CarouselError::Configuration(ConfigurationError::NonPositiveIncrement(0))
    ));
    assert!(!engine.is_initialized());
}

#[test]
fn unparseable_increment_falls_back_to_default() {
    let engine = init_engine(3, CarouselOptions::new().with_increment("wide"));
    assert_eq!(engine.config().map(|config| config.increment), Some(1));
}

#[test]
fn navigation_before_init_fails() {
    let mut engine = CarouselEngine::new(RecordingHost::default(), HOLDER);

    assert!(matches!(engine.next(), Err(CarouselError::NotInitialized)));
    assert!(matches!(engine.snapshot(), Err(CarouselError::NotInitialized)));
    assert!(!engine.tile_focus_changed(tile(0), FocusChange::Gained));
}

#[test]
fn clicks_are_routed_by_class_name() {
    let mut engine = init_engine(4, CarouselOptions::new());

    assert_eq!(engine.dispatch_control("nextFrame").unwrap(), Some(HOLDER));
    assert_eq!(engine.dispatch_control("nextFrame").unwrap(), Some(HOLDER));
    assert_eq!(engine.dispatch_control("prevFrame").unwrap(), Some(HOLDER));
    assert_eq!(engine.dispatch_control("carousel-tile").unwrap(), None);

    assert_eq!(engine.snapshot().unwrap().index, 1);
}

#[test]
fn focus_marker_follows_tile_focus() {
    let mut engine = init_engine(3, CarouselOptions::new());
    engine.host_mut().take_calls();

    assert!(engine.tile_focus_changed(tile(0), FocusChange::Gained));
    assert!(!engine.tile_focus_changed(tile(0), FocusChange::Gained));
    assert!(!engine.tile_focus_changed(NodeHandle(999), FocusChange::Gained));

    let focused = TileAccessibility {
        focused: true,
        ..visible()
    };
    assert_eq!(
        engine.host().calls,
        vec![Call::Accessibility(tile(0), focused)]
    );

    assert!(engine.tile_focus_changed(tile(0), FocusChange::Lost));
    assert!(!engine.snapshot().unwrap().tiles[0].accessibility.focused);
}

#[test]
fn inaccessible_carousel_still_moves_focus() {
    let mut engine = init_engine(3, CarouselOptions::new().with_accessible(false));
    engine.next().unwrap();

    let calls = &engine.host().calls;
    assert!(!calls.iter().any(Call::is_accessibility));
    assert_eq!(engine.host().focused(), vec![tile(1)]);
    assert!(
        engine
            .snapshot()
            .unwrap()
            .tiles
            .iter()
            .all(|tile| tile.accessibility == TileAccessibility::default())
    );
}

#[test]
fn each_instance_initializes_accessibility_independently() {
    let first = init_engine(3, CarouselOptions::new());
    let second = init_engine(3, CarouselOptions::new());

    for engine in [&first, &second] {
        let snapshot = engine.snapshot().unwrap();
        assert!(
            snapshot
                .tiles
                .iter()
                .all(|tile| tile.accessibility.tab_index == Some(-1))
        );
        assert_eq!(snapshot.visible_tiles().collect::<Vec<_>>(), handles(0..1));
    }
}

#[test]
fn silent_advance_skips_transition() {
    let mut engine = init_engine(6, CarouselOptions::new().with_increment(2));
    engine.host_mut().take_calls();

    engine.advance(4, false).unwrap();

    assert!(engine.host().events().is_empty());
    assert!(engine.host().focused().is_empty());
    let snapshot = engine.snapshot().unwrap();
    assert_eq!(snapshot.index, 4);
    assert!(snapshot.prev_enabled);
    assert!(!snapshot.next_enabled);
}

#[test]
fn tile_mode_steps_by_one_tile() {
    let mut engine = init_engine(
        5,
        CarouselOptions::new()
            .with_increment(2)
            .with_increment_mode(IncrementMode::Tile),
    );

    engine.next().unwrap();
    let snapshot = engine.snapshot().unwrap();
    assert_eq!(snapshot.index, 1);
    assert_eq!(snapshot.frame_index, 1);
    assert_eq!(snapshot.current_frame, handles(1..3));

    engine.next().unwrap();
    engine.next().unwrap();
    engine.next().unwrap();
    let snapshot = engine.snapshot().unwrap();
    assert_eq!(snapshot.index, 3);
    assert_eq!(snapshot.current_tile, tile(3));
    assert!(!snapshot.next_enabled);

    engine.prev().unwrap();
    assert_eq!(engine.snapshot().unwrap().index, 2);
}

#[test]
fn spacer_tiles_are_left_alone() {
    let mut specs = tiles(3);
    specs.push(TileSpec::spacer(tile(3)));
    let mut engine = CarouselEngine::new(RecordingHost::default(), HOLDER);
    engine
        .init(specs, CarouselOptions::new().with_increment(2))
        .unwrap();
    engine.next().unwrap();

    let calls = &engine.host().calls;
    assert!(calls.contains(&Call::BindTileFocus(handles(0..3))));
    assert!(
        !calls
            .iter()
            .any(|call| matches!(call, Call::Accessibility(node, _) if *node == tile(3)))
    );

    let snapshot = engine.snapshot().unwrap();
    assert_eq!(snapshot.current_frame, handles(2..4));
    assert_eq!(snapshot.tiles[3].accessibility, TileAccessibility::default());
    assert_eq!(snapshot.visible_tiles().collect::<Vec<_>>(), handles(2..4));
}

#[test]
fn repeated_navigation_clamps_at_both_ends() {
    let mut engine = init_engine(5, CarouselOptions::new());

    engine.prev().unwrap();
    let snapshot = engine.snapshot().unwrap();
    assert_eq!(snapshot.index, 0);
    assert!(!snapshot.prev_enabled);

    for _ in 0..5 {
        engine.next().unwrap();
    }
    let snapshot = engine.snapshot().unwrap();
    assert_eq!(snapshot.index, 4);
    assert!(!snapshot.next_enabled);
    assert_eq!(snapshot.current_tile, tile(4));
}
