extern crate podbot;

use podbot::*;

use flo_canvas::*;
use flo_draw::*;

use futures::executor;
use futures::prelude::*;

use rand::Rng;

const FIELD_WIDTH: i32 = 16000;
const FIELD_HEIGHT: i32 = 9000;

// Forward-model constants, not used by the strategy itself
const TURN_ROTATION_LIMIT: i32 = 18;
const BOOST_THRUST: i32 = 650;
const LAPS: u32 = 3;

fn gen_random_race() -> Race {
    let mut rng = rand::thread_rng();

    let count = rng.gen_range(3..=6);
    let mut checkpoints: Vec<Point> = Vec::new();

    while checkpoints.len() < count {
        let p = Point::new(
            rng.gen_range(1000..FIELD_WIDTH - 1000),
            rng.gen_range(1000..FIELD_HEIGHT - 1000),
        );

        if checkpoints.iter().all(|cp| cp.distance(p) > 2400) {
            checkpoints.push(p);
        }
    }

    Race::new(LAPS, checkpoints)
}

/// Plays one pod forward with the real game's motion rules: clamped
/// rotation, thrust along facing, integration, then drag.
fn apply_move(pod: &Pod, mv: &Move) -> Pod {
    let bearing = (mv.target - pod.position).angle();

    let facing = if pod.angle == ANGLE_UNSET {
        // First turn: the pod snaps straight at its target.
        bearing
    } else {
        let mut delta = normalize(bearing - pod.angle);
        if delta > 180 {
            delta -= 360;
        }
        normalize(pod.angle + delta.clamp(-TURN_ROTATION_LIMIT, TURN_ROTATION_LIMIT))
    };

    let thrust = if mv.boost { BOOST_THRUST } else { mv.speed() };
    let velocity = pod.velocity + Vector::new(thrust, facing).to_point();
    let position = pod.position + velocity;

    Pod {
        position,
        velocity: velocity * Tuning::DEFAULT.drag_decay,
        angle: facing,
        next_cp_id: pod.next_cp_id,
    }
}

struct SimRace {
    race: Race,
    pod: Pod,
    trail: Vec<Point>,
    captured: u32,
    turn: u32,
}

impl SimRace {
    fn new() -> Self {
        let race = gen_random_race();
        let pod = Pod {
            position: race.checkpoint(0),
            velocity: Point::default(),
            angle: ANGLE_UNSET,
            next_cp_id: 1,
        };
        let trail = vec![pod.position];

        SimRace {
            race,
            pod,
            trail,
            captured: 0,
            turn: 0,
        }
    }

    fn finished(&self) -> bool {
        self.captured >= self.race.laps * self.race.checkpoint_count() as u32
    }

    fn step(&mut self, strategy: &Strategy) {
        if self.finished() {
            return;
        }

        let mv = strategy.decide(&self.race, &self.pod);
        let mut pod = apply_move(&self.pod, &mv);

        let cp = self.race.checkpoint(pod.next_cp_id);
        if pod.position.distance(cp) <= Tuning::DEFAULT.checkpoint_radius {
            pod.next_cp_id = (pod.next_cp_id + 1) % self.race.checkpoint_count();
            self.captured += 1;
        }

        self.pod = pod;
        self.turn += 1;
        self.trail.push(pod.position);

        if self.finished() {
            eprintln!("course complete in {} turns", self.turn);
        }
    }
}

fn scaled(p: Point) -> (f32, f32) {
    (p.x as f32 * 0.1, 900.0 - p.y as f32 * 0.1)
}

fn draw_circle_at(gc: &mut CanvasGraphicsContext, p: Point, radius: f32, col: Color) {
    let (x, y) = scaled(p);
    gc.new_path();

    gc.circle(x, y, radius);

    gc.fill_color(col);

    gc.fill();
    gc.line_width(1.0);
    gc.stroke_color(Color::Rgba(0.0, 0.0, 0.0, 1.0));
    gc.stroke();
}

fn draw_line(gc: &mut CanvasGraphicsContext, from: Point, to: Point, col: Color) {
    let (x1, y1) = scaled(from);
    let (x2, y2) = scaled(to);

    gc.new_path();
    gc.move_to(x1, y1);
    gc.line_to(x2, y2);
    gc.line_width(1.0);
    gc.stroke_color(col);
    gc.stroke();
}

fn draw_race(gc: &mut CanvasGraphicsContext, sim: &SimRace) {
    for id in 0..sim.race.checkpoint_count() {
        let col = if id == sim.pod.next_cp_id {
            Color::Rgba(1.0, 0.5, 0.0, 0.8)
        } else {
            Color::Rgba(0.0, 0.7, 0.0, 0.4)
        };
        // capture radius 600 at 0.1 scale
        draw_circle_at(gc, sim.race.checkpoint(id), 60.0, col);
    }

    draw_circle_at(gc, sim.pod.position, 12.0, Color::Rgba(0.0, 0.0, 1.0, 1.0));

    if sim.pod.angle != ANGLE_UNSET {
        let nose = sim.pod.position + Vector::new(800, sim.pod.angle).to_point();
        draw_line(gc, sim.pod.position, nose, Color::Rgba(0.0, 0.0, 0.0, 1.0));
    }
}

fn draw_trail(gc: &mut CanvasGraphicsContext, trail: &[Point]) {
    if trail.len() < 2 {
        return;
    }

    gc.new_path();
    let (x, y) = scaled(trail[0]);
    gc.move_to(x, y);
    for p in &trail[1..] {
        let (x, y) = scaled(*p);
        gc.line_to(x, y);
    }
    gc.line_width(1.0);
    gc.stroke_color(Color::Rgba(0.0, 0.0, 1.0, 0.5));
    gc.stroke();
}

fn draw_coast(gc: &mut CanvasGraphicsContext, pod: &Pod) {
    let dest = pod.coast_dest(&Tuning::DEFAULT);
    draw_line(gc, pod.position, dest, Color::Rgba(0.5, 0.5, 0.5, 1.0));
    draw_circle_at(gc, dest, 5.0, Color::Rgba(0.5, 0.5, 0.5, 1.0));
}

struct App {
    sim: SimRace,
    strategy: Strategy,
    canvas: Canvas,

    draw_coast: bool,
    draw_trail: bool,
}

impl App {
    fn new(canvas: Canvas) -> Self {
        App {
            sim: SimRace::new(),
            strategy: Strategy::new(),
            canvas,
            draw_coast: true,
            draw_trail: true,
        }
    }

    fn redraw(&mut self) {
        let sim = &self.sim;
        let (show_coast, show_trail) = (self.draw_coast, self.draw_trail);

        self.canvas.draw(|gc| {
            gc.clear_all_layers();
            gc.canvas_height(900.0);
            gc.center_region(0.0, 0.0, 1600.0, 900.0);

            if show_trail {
                draw_trail(gc, &sim.trail);
            }

            draw_race(gc, sim);

            if show_coast {
                draw_coast(gc, &sim.pod);
            }
        });
    }

    fn step_turn(&mut self) {
        self.sim.step(&self.strategy);
        self.redraw();
    }

    fn regenerate(&mut self) {
        self.sim = SimRace::new();
        self.redraw();
    }
}

fn main() {
    with_2d_graphics(|| {
        executor::block_on(async {
            let (canvas, mut events) = create_canvas_window_with_events("PODBOT");

            let mut app = App::new(canvas);

            app.redraw();

            while let Some(event) = events.next().await {
                match event {
                    DrawEvent::KeyDown(_, Some(Key::KeySpace)) => {
                        app.step_turn();
                    }
                    DrawEvent::KeyDown(_, Some(Key::KeyR)) => {
                        app.regenerate();
                    }
                    DrawEvent::KeyDown(_, Some(Key::KeyEscape)) => {
                        std::process::exit(0);
                    }
                    DrawEvent::KeyDown(_, Some(Key::Key1)) => {
                        app.draw_coast = !app.draw_coast;
                        app.redraw();
                    }
                    DrawEvent::KeyDown(_, Some(Key::Key2)) => {
                        app.draw_trail = !app.draw_trail;
                        app.redraw();
                    }
                    _ => {}
                }
            }
        });
    });
}
