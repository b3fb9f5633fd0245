//! Terminal runner (default binary).
//!
//! Drives the platform contract with a small attract-mode runner: a ball rolls
//! over a scrolling floor and jumps over spikes. Space jumps, Esc pauses, q or
//! Ctrl-C quits.

use std::fs::File;

use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target};

use paint_run::math::{mul, to_fixed, to_int};
use paint_run::platform::{Backend, Config, Console, Platform};
use paint_run::term::{MonoText, TermBackend};
use paint_run::types::{Fixed, KeyAction, MenuAction, FIXED_ONE};

const GRAVITY: Fixed = FIXED_ONE / 2;
const JUMP_SPEED: Fixed = -7 * FIXED_ONE;
const SCROLL_SPEED: Fixed = 3 * FIXED_ONE;

fn main() -> Result<()> {
    let config = Config::from_env();
    init_logging(&config)?;
    log::info!("starting with {:?}", config);

    let backend = TermBackend::new()?;
    let mut console = Console::new(&config, backend, MonoText::new());
    console.srand();

    let result = run(&mut console);

    // Always try to restore terminal state.
    if let Err(e) = console.backend_mut().shutdown() {
        log::warn!("failed to restore terminal: {:#}", e);
    }
    result
}

fn init_logging(config: &Config) -> Result<()> {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    builder.format_timestamp_micros();
    if let Some(path) = &config.log_path {
        let file = File::create(path).with_context(|| format!("opening log file {}", path))?;
        builder.target(Target::Pipe(Box::new(file)));
    }
    builder.init();
    Ok(())
}

/// Runner state, all in fixed-point pixels.
struct Run {
    ball_y: Fixed,
    velocity: Fixed,
    spike_x: Fixed,
    distance: Fixed,
    scroll: i32,
    phase: u8,
}

impl Run {
    fn new<P: Platform>(p: &mut P) -> Self {
        Self {
            ball_y: to_fixed(floor_y(p.height())),
            velocity: 0,
            spike_x: to_fixed(p.width() as i32 + (p.rand() % 64) as i32),
            distance: 0,
            scroll: 0,
            phase: 0,
        }
    }
}

fn floor_y(height: u32) -> i32 {
    height as i32 * 3 / 4
}

fn ball_radius(height: u32) -> i32 {
    (height as i32 / 24).clamp(2, 40)
}

fn run<P: Platform>(p: &mut P) -> Result<()> {
    while p.do_menu() == MenuAction::Play {
        let mut state = Run::new(p);
        loop {
            let frame_start = p.time_ms();
            p.yield_events();
            match p.poll_action() {
                KeyAction::Jump if state.velocity == 0 => state.velocity = JUMP_SPEED,
                KeyAction::Pause => pause(p),
                _ => {}
            }

            if !step(p, &mut state) {
                p.log(&format!("run over after {} m", to_int(state.distance)));
                p.game_over();
                break;
            }
            draw(p, &state);
            p.update();

            let elapsed = p.time_ms().saturating_sub(frame_start);
            p.sleep(16u64.saturating_sub(elapsed));
        }
    }
    Ok(())
}

fn pause<P: Platform>(p: &mut P) {
    loop {
        p.paused();
        p.yield_events();
        if p.poll_action() == KeyAction::Pause {
            return;
        }
        p.sleep(16);
    }
}

/// Advance one frame. Returns `false` when the ball hits a spike.
fn step<P: Platform>(p: &mut P, s: &mut Run) -> bool {
    let floor = floor_y(p.height());
    let r = ball_radius(p.height());

    s.velocity += GRAVITY;
    s.ball_y += s.velocity;
    if s.ball_y >= to_fixed(floor) {
        s.ball_y = to_fixed(floor);
        s.velocity = 0;
    }

    s.spike_x -= SCROLL_SPEED;
    s.distance = s.distance.saturating_add(SCROLL_SPEED / 8);
    s.scroll = (s.scroll + to_int(SCROLL_SPEED)) % 16;
    s.phase = s.phase.wrapping_add(2);
    if to_int(s.spike_x) < -r * 2 {
        let gap = 32 + (p.rand() % p.width().max(1)) as i32;
        s.spike_x = to_fixed(p.width() as i32 + gap);
    }

    // Ball centre against the spike tip, in whole pixels.
    let dx = p.width() as i32 / 4 - to_int(s.spike_x);
    let dy = to_int(s.ball_y) - (floor - r);
    if dx.abs() > r * 2 || dy.abs() > r * 2 {
        return true;
    }
    p.sqrt(to_fixed(dx * dx + dy * dy)) > to_fixed(r + 1)
}

fn draw<P: Platform>(p: &mut P, s: &Run) {
    let (w, h) = (p.width() as i32, p.height() as i32);
    let floor = floor_y(p.height());
    let r = ball_radius(p.height());

    let sky = p.rgb_pack(16, 16, 40);
    p.set_background(sky);
    p.clear();

    // Sun bobbing on a cosine.
    let sun = p.rgb_pack(250, 200, 60);
    p.set_foreground(sun);
    let bob = to_int(mul(p.cos_table(s.phase), to_fixed(h / 24)));
    p.fill_circle(w * 3 / 4, h / 5 + bob, h / 12);

    // Floor with scrolling ticks.
    let ground = p.rgb_pack(60, 140, 60);
    p.set_foreground(ground);
    p.fill_rect(0, floor + r, w, h - floor - r);
    let tick = p.rgb_pack(30, 90, 30);
    p.set_foreground(tick);
    let mut x = -s.scroll;
    while x < w {
        p.vline(x, floor + r, h);
        x += 16;
    }
    p.hline(0, w, floor + r);

    // Spike.
    let spike = p.rgb_pack(220, 60, 60);
    p.set_foreground(spike);
    let sx = to_int(s.spike_x);
    let base = floor + r;
    p.fill_triangle(sx - r, base, sx + r, base, sx, base - r * 2);

    // Ball with a spinning marker.
    let ball = p.rgb_pack(240, 240, 240);
    p.set_foreground(ball);
    let bx = w / 4;
    let by = to_int(s.ball_y);
    p.fill_circle(bx, by, r);
    let marker = p.rgb_pack(40, 40, 200);
    p.set_foreground(marker);
    let angle = to_fixed(s.phase as i32 * 360 / 256);
    let mx = bx + to_int(mul(p.cos(angle), to_fixed(r / 2)));
    let my = by + to_int(mul(p.sin(angle), to_fixed(r / 2)));
    p.draw_pixel(mx, my);
    p.draw_rect(mx - 1, my - 1, 3, 3);

    p.draw_score(s.distance);
}
