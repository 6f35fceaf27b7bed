use chrono::NaiveDate;

use crate::models::{RankedGame, GAME_SIZE};

/// Relatório em texto: título, data e uma linha de largura fixa por jogo.
/// A codificação para PDF ou outro formato binário fica fora do núcleo.
pub fn render_report(games: &[RankedGame], contest: u32, generated_at: NaiveDate) -> String {
    let mut lines = Vec::with_capacity(games.len() + 3);
    lines.push(format!("Jogos LotoElite - Concurso {}", contest));
    lines.push(format!("Gerado em {}", generated_at.format("%d/%m/%Y")));
    lines.push(String::new());
    for (i, game) in games.iter().enumerate() {
        lines.push(format_line(i + 1, game));
    }
    lines.join("\n")
}

pub fn format_line(rank: usize, game: &RankedGame) -> String {
    let numbers = game
        .numbers
        .iter()
        .map(|n| format!("{:02}", n))
        .collect::<Vec<_>>()
        .join(" ");
    format!(
        "{:02}: {} | R$ {} | {}",
        rank,
        numbers,
        game.score.total,
        game.score.badge()
    )
}

/// Recupera (posição, dezenas) de uma linha de jogo. Linhas de cabeçalho e
/// linhas vazias retornam `None`.
pub fn parse_line(line: &str) -> Option<(usize, [u8; GAME_SIZE])> {
    let (rank_part, rest) = line.split_once(':')?;
    let rank: usize = rank_part.trim().parse().ok()?;
    let numbers_part = rest.split('|').next()?;
    let parsed: Vec<u8> = numbers_part
        .split_whitespace()
        .map(|token| token.parse::<u8>())
        .collect::<Result<_, _>>()
        .ok()?;
    if parsed.len() != GAME_SIZE {
        return None;
    }
    let mut numbers = [0u8; GAME_SIZE];
    numbers.copy_from_slice(&parsed);
    Some((rank, numbers))
}
