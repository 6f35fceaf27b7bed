use crate::models::{Draw, RankedGame};

/// Fotografia do histórico obtido do endpoint, substituída por inteiro a cada
/// sincronização. `draws[0]` é o concurso mais recente.
#[derive(Debug, Clone)]
pub struct LotteryData {
    pub draws: Vec<Draw>,
    pub contest: u32,
    pub next_prize: Option<f64>,
}

impl LotteryData {
    pub fn last_draw(&self) -> Option<&Draw> {
        self.draws.first()
    }

    pub fn next_contest(&self) -> u32 {
        self.contest + 1
    }
}

/// Estado de uma sessão do usuário: histórico sincronizado e o conjunto de
/// jogos da última geração. Sempre passado explicitamente, nunca global.
#[derive(Debug, Default)]
pub struct Session {
    pub data: Option<LotteryData>,
    pub games: Vec<RankedGame>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_draw(contest: u32) -> Draw {
        Draw {
            contest,
            date: "01/01/2026".to_string(),
            numbers: [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15],
        }
    }

    #[test]
    fn test_last_draw_is_most_recent() {
        let data = LotteryData {
            draws: vec![test_draw(3000), test_draw(2999)],
            contest: 3000,
            next_prize: None,
        };
        assert_eq!(data.last_draw().unwrap().contest, 3000);
        assert_eq!(data.next_contest(), 3001);
    }

    #[test]
    fn test_last_draw_empty_history() {
        let data = LotteryData {
            draws: vec![],
            contest: 0,
            next_prize: None,
        };
        assert!(data.last_draw().is_none());
    }

    #[test]
    fn test_session_starts_empty() {
        let session = Session::default();
        assert!(session.data.is_none());
        assert!(session.games.is_empty());
    }
}
