use serde::{Deserialize, Serialize};

use crate::models::{count_matches, Draw, ScoreResult, GAME_SIZE};

/// Janela de concursos considerada no backtest.
pub const BACKTEST_WINDOW: usize = 100;

/// Prêmios fixos por faixa de acertos, em reais inteiros.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayoutTable {
    pub eleven: u64,
    pub twelve: u64,
    pub thirteen: u64,
    pub fourteen: u64,
    pub fifteen: u64,
}

impl PayoutTable {
    pub const STANDARD: PayoutTable = PayoutTable {
        eleven: 7,
        twelve: 12,
        thirteen: 30,
        fourteen: 1700,
        fifteen: 1_000_000,
    };

    pub const JACKPOT: PayoutTable = PayoutTable {
        eleven: 7,
        twelve: 12,
        thirteen: 30,
        fourteen: 1700,
        fifteen: 1_500_000,
    };

    pub fn for_tier(&self, tier: usize) -> u64 {
        match tier {
            11 => self.eleven,
            12 => self.twelve,
            13 => self.thirteen,
            14 => self.fourteen,
            15 => self.fifteen,
            _ => 0,
        }
    }
}

/// Reproduz o jogo contra os últimos 100 concursos (ou todos, se houver
/// menos), acumulando as faixas de 11 a 15 acertos e o retorno total.
pub fn score(game: &[u8; GAME_SIZE], draws: &[Draw], table: &PayoutTable) -> ScoreResult {
    let mut result = ScoreResult::default();
    for draw in draws.iter().take(BACKTEST_WINDOW) {
        let matches = count_matches(game, &draw.numbers);
        if matches >= 11 {
            result.hits[matches - 11] += 1;
            result.total += table.for_tier(matches);
        }
    }
    result
}
