//! The platform contract driven end to end over the headless backend.

use std::panic::{catch_unwind, AssertUnwindSafe};

use paint_run::core::{FrameBuffer, PixelFormat};
use paint_run::input::{KeyCode, RawEvent};
use paint_run::platform::headless::{BoxText, Headless};
use paint_run::platform::{Config, Console, Platform};
use paint_run::types::{KeyAction, FADE_FRAMES};

fn console(backend: Headless, text: BoxText) -> Console<Headless, BoxText> {
    Console::new(&Config::default(), backend, text)
}

#[test_log::test]
fn fade_out_darkens_monotonically_to_black() {
    let mut hl = Headless::new().with_recording();
    hl.push_event(RawEvent::KeyDown(KeyCode::Char('x')));
    let mut c = console(hl, BoxText::new());
    let white = c.rgb_pack(255, 255, 255);
    c.set_background(white);
    c.clear();

    c.game_over();

    let frames = c.backend().frames();
    // The game-over frame, then one frame per fade step.
    assert_eq!(frames.len(), 1 + FADE_FRAMES as usize);
    for pair in frames[1..].windows(2) {
        assert!(pair[0].iter().zip(&pair[1]).all(|(a, b)| b <= a));
    }
    let last = frames.last().unwrap();
    assert!(last.iter().all(|&b| b <= 1));
}

#[test_log::test]
fn game_over_blocks_until_a_key_arrives() {
    let mut hl = Headless::new();
    hl.schedule(500, RawEvent::Resize(80, 24));
    hl.schedule(1_000, RawEvent::KeyDown(KeyCode::Char(' ')));
    let mut c = console(hl, BoxText::new());

    c.game_over();

    let frame_ms = Config::default().frame_ms;
    let fade_ms = FADE_FRAMES as u64 * frame_ms;
    assert!(c.time_ms() >= 1_000 + fade_ms);
    assert!(c.time_ms() < 1_000 + 2 * frame_ms + fade_ms);
    assert_eq!(c.poll_action(), KeyAction::None);
}

#[test_log::test]
fn missing_font_skips_score_without_drawing() {
    let mut c = console(Headless::new(), BoxText::unavailable());
    c.clear();
    c.draw_score(12 << 16);
    assert!(c.framebuffer().bytes().iter().all(|&b| b == 0));
    assert_eq!(c.text_service().calls(), 1);
}

#[test]
fn latest_key_wins_between_polls() {
    let mut c = console(Headless::new(), BoxText::new());
    c.backend_mut().push_event(RawEvent::KeyDown(KeyCode::Char(' ')));
    c.backend_mut().push_event(RawEvent::KeyDown(KeyCode::Esc));
    c.yield_events();
    assert_eq!(c.poll_action(), KeyAction::Pause);
    assert_eq!(c.poll_action(), KeyAction::None);
}

#[test]
fn quit_restores_the_host_then_exits() {
    let mut c = console(Headless::new(), BoxText::new());
    c.backend_mut().push_event(RawEvent::Quit);

    let exited = catch_unwind(AssertUnwindSafe(|| c.yield_events()));
    let payload = exited.expect_err("quit must not return");
    assert_eq!(payload.downcast_ref::<&str>(), Some(&"quit requested"));
    assert_eq!(c.backend().shutdowns(), 1);
}

#[test]
fn padded_host_framebuffer_is_supported() {
    let fb = FrameBuffer::with_pitch(320, 240, 1344, PixelFormat::Xbgr8888).unwrap();
    let mut c = Console::with_framebuffer(fb, &Config::default(), Headless::new(), BoxText::new());
    let blue = c.rgb_pack(0, 0, 255);
    c.set_foreground(blue);
    c.fill_rect(10, 10, 5, 5);
    assert_eq!(c.framebuffer().pixel(12, 12), Some(0x00FF_0000));
    assert_eq!(c.framebuffer().pitch(), 1344);
}

#[test]
fn math_defaults_come_from_the_math_crate() {
    let c = console(Headless::new(), BoxText::new());
    assert_eq!(c.cos(0), 1 << 16);
    assert_eq!(c.cos_table(128), -(1 << 16));
    assert_eq!(c.sqrt(16 << 16), 4 << 16);
    assert_eq!(c.width(), 320);
    assert_eq!(c.height(), 240);
}
