extern crate podbot;

use std::io;

use podbot::{geometry::Point, pod::Pod, race::Race, strategy::Strategy, world::World};

macro_rules! parse_input {
    ($x:expr, $t:ident) => {
        $x.trim().parse::<$t>().unwrap()
    };
}

const PODS_PER_SIDE: usize = 2;

fn read_pods(count: usize) -> Vec<Pod> {
    let mut pods = Vec::with_capacity(count);

    for _ in 0..count {
        let mut input_line = String::new();
        io::stdin().read_line(&mut input_line).unwrap();

        let inputs = input_line.split(" ").collect::<Vec<_>>();
        let x = parse_input!(inputs[0], i32);
        let y = parse_input!(inputs[1], i32);
        let vx = parse_input!(inputs[2], i32);
        let vy = parse_input!(inputs[3], i32);
        let angle = parse_input!(inputs[4], i32);
        let next_cp_id = parse_input!(inputs[5], usize);

        pods.push(Pod {
            position: Point::new(x, y),
            velocity: Point::new(vx, vy),
            angle,
            next_cp_id,
        });
    }

    pods
}

fn main() {
    let mut input_line = String::new();
    io::stdin().read_line(&mut input_line).unwrap();
    let laps = parse_input!(input_line, u32);

    input_line.clear();
    io::stdin().read_line(&mut input_line).unwrap();
    let checkpoint_count = parse_input!(input_line, usize);

    let mut checkpoints = Vec::with_capacity(checkpoint_count);
    for _ in 0..checkpoint_count {
        let mut input_line = String::new();
        io::stdin().read_line(&mut input_line).unwrap();

        let inputs = input_line.split(" ").collect::<Vec<_>>();
        checkpoints.push(Point::new(
            parse_input!(inputs[0], i32),
            parse_input!(inputs[1], i32),
        ));
    }

    let mut world = World::new(Race::new(laps, checkpoints));
    let strategy = Strategy::new();

    // game loop
    loop {
        let me = read_pods(PODS_PER_SIDE);
        let opponent = read_pods(PODS_PER_SIDE);
        world.update(me, opponent);

        strategy.play(&world);
    }
}
