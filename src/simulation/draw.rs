use crate::combinatorics::{BonusCondition, LotteryConfiguration, MatchQuery};
use crate::simulation::rng::Rng;

/// One simulated drawing. Numbers run from 1 to the pool size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draw {
    pub winners: Vec<u32>,
    pub bonus: Option<u32>,
}

/// Reusable scratch space so a batch allocates the pool once.
#[derive(Debug, Clone)]
pub struct DrawMachine {
    config: LotteryConfiguration,
    balls: Vec<u32>,
}

impl DrawMachine {
    pub fn new(config: LotteryConfiguration) -> Self {
        Self {
            config,
            balls: (1..=config.pool_size()).collect(),
        }
    }

    /// Partial Fisher-Yates: the first `draw_size` slots become the winners and the next slot,
    /// when the game has one, the bonus. The remainder is exchangeable, so the bonus is uniform
    /// over every number left after the main draw.
    pub fn draw(&mut self, rng: &mut Rng) -> Draw {
        let draw_size = self.config.draw_size() as usize;
        let picks = if self.config.has_bonus() {
            draw_size + 1
        } else {
            draw_size
        };
        let len = self.balls.len();
        for slot in 0..picks.min(len) {
            let offset = rng.below((len - slot) as u64) as usize;
            self.balls.swap(slot, slot + offset);
        }
        Draw {
            winners: self.balls[..draw_size].to_vec(),
            bonus: self.config.has_bonus().then(|| self.balls[draw_size]),
        }
    }

    /// Tier reached by the ticket `1..=draw_size` against a drawing, without allocating.
    pub fn classify_fixed_ticket(&self, draw: &Draw) -> MatchQuery {
        let draw_size = self.config.draw_size();
        let on_ticket = |n: u32| n <= draw_size;
        classify(&self.config, draw, on_ticket)
    }
}

/// Tier reached by an arbitrary ticket.
pub fn classify_ticket(config: &LotteryConfiguration, draw: &Draw, ticket: &[u32]) -> MatchQuery {
    classify(config, draw, |n| ticket.contains(&n))
}

fn classify(
    config: &LotteryConfiguration,
    draw: &Draw,
    on_ticket: impl Fn(u32) -> bool,
) -> MatchQuery {
    let k = draw.winners.iter().filter(|&&n| on_ticket(n)).count() as u32;
    let condition = match draw.bonus {
        None => BonusCondition::None,
        Some(bonus) if on_ticket(bonus) => BonusCondition::IncludingBonus,
        Some(_) => BonusCondition::ExcludingBonus,
    };
    debug_assert!(config.has_bonus() == draw.bonus.is_some());
    MatchQuery::new(k, condition)
}
