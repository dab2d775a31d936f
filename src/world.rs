use super::pod::Pod;
use super::race::Race;

/// Everything known this turn: the fixed race plus the latest telemetry for
/// both sides. Opposing pods are part of the feed contract and carried here,
/// but the heuristics never read them.
#[derive(Debug)]
pub struct World {
    pub race: Race,
    pub me: Vec<Pod>,
    pub opponent: Vec<Pod>,
    pub turn: u32,
}

impl World {
    pub fn new(race: Race) -> Self {
        World {
            race,
            me: Vec::new(),
            opponent: Vec::new(),
            turn: 0,
        }
    }

    pub fn update(&mut self, me: Vec<Pod>, opponent: Vec<Pod>) {
        self.me = me;
        self.opponent = opponent;
        self.turn += 1;
    }

    pub fn first_turn(&self) -> bool {
        self.turn == 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;

    #[test]
    fn turn_counter_advances_per_update() {
        let mut world = World::new(Race::new(3, vec![Point::new(0, 0)]));
        assert_eq!(world.turn, 0);
        assert!(!world.first_turn());

        world.update(vec![Pod::default()], vec![Pod::default()]);
        assert_eq!(world.turn, 1);
        assert!(world.first_turn());

        world.update(vec![Pod::default()], vec![Pod::default()]);
        assert!(!world.first_turn());
    }
}
