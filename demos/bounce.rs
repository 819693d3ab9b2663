//=========================================================================
// Bounce
//
// A ball bouncing around a window.
//
// Controls:
// - SPACE        reverse the ball
// - Left click   move the ball to the cursor
// - ESCAPE       quit
//
// Run with `RUST_LOG=debug cargo run --example bounce` for platform logs.
//
//=========================================================================

use easel::prelude::*;

const WIDTH: u32 = 640;
const HEIGHT: u32 = 480;
const RADIUS: i32 = 16;

fn main() -> Result<(), EaselError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let context = Context::new()?;
    let mut window = context.window(&WindowConfig::new("bounce", WIDTH, HEIGHT))?;
    let mut event = context.event();
    let mut keyboard = context.keyboard();
    let mut mouse = context.mouse();

    let (mut x, mut y) = (WIDTH as i32 / 2, HEIGHT as i32 / 2);
    let (mut vx, mut vy) = (3, 2);
    let mut bounces = 0u32;

    'main: loop {
        //--- Events -------------------------------------------------------
        while event.poll() {
            match event.kind() {
                Some(EventType::Quit) => break 'main,
                Some(EventType::Window) => {
                    if let Some(w) = event.window() {
                        if w == WindowEventId::RESIZED {
                            log::info!("Resized to {}x{}", w.data1(), w.data2());
                        }
                    }
                }
                _ => {}
            }
        }

        //--- Input --------------------------------------------------------
        if keyboard.pressed(Scancode::ESCAPE) {
            break;
        }
        if keyboard.pressed(Scancode::SPACE) {
            vx = -vx;
            vy = -vy;
        }
        if mouse.pressed(MouseButton::LEFT) {
            (x, y) = mouse.position();
        }

        //--- Update -------------------------------------------------------
        x += vx;
        y += vy;
        if x < RADIUS || x > WIDTH as i32 - RADIUS {
            vx = -vx;
            bounces += 1;
        }
        if y < RADIUS || y > HEIGHT as i32 - RADIUS {
            vy = -vy;
            bounces += 1;
        }

        //--- Draw ---------------------------------------------------------
        window.clear(Color::DARKGRAY);
        window.put_unfilled_rect(Rect::new(4, 4, WIDTH - 8, HEIGHT - 8), Color::GRAY)?;
        window.put_circle(Circle::new(x, y, RADIUS), Color::ORANGE)?;
        window.put_unfilled_circle(Circle::new(x, y, RADIUS + 4), Color::rgba(255, 255, 255, 96))?;
        for i in 0..bounces.min(20) as i32 {
            window.put_rect(Rect::new(12 + i * 10, 12, 6, 6), Color::YELLOW)?;
        }
        window.present()?;

        delay(16);
    }

    log::info!("Bounced {} times in {} ms", bounces, context.ticks());
    Ok(())
}
