use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};

use lotoelite_core::generator::SearchOutcome;
use lotoelite_core::models::{Badge, Draw, RankedGame};
use lotoelite_core::session::LotteryData;

fn join_numbers(numbers: &[u8]) -> String {
    numbers
        .iter()
        .map(|n| format!("{:02}", n))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn display_status(data: &LotteryData, gap: &[u8], hot: &[u8]) {
    println!("\n🎯 Concurso alvo: {}", data.next_contest());
    if let Some(prize) = data.next_prize {
        println!("💰 Prêmio estimado: R$ {:.2}", prize);
    }
    if let Some(last) = data.last_draw() {
        println!(
            "Último sorteio ({}): {}",
            last.contest,
            join_numbers(&last.numbers)
        );
    }
    display_gap(gap);
    println!("🔥 Dezenas quentes: {}", join_numbers(hot));
}

pub fn display_gap(gap: &[u8]) {
    if gap.is_empty() {
        println!("Ciclo fechado: nenhuma dezena em atraso.");
    } else {
        println!("Ciclo: faltam {}", join_numbers(gap));
    }
}

pub fn display_draws(draws: &[Draw]) {
    if draws.is_empty() {
        println!("Nenhum sorteio para exibir.");
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Concurso", "Data", "Dezenas"]);

    for draw in draws {
        table.add_row(vec![
            &draw.contest.to_string(),
            &draw.date,
            &join_numbers(&draw.numbers),
        ]);
    }

    println!("{table}");
}

fn badge_color(badge: Badge) -> Color {
    match badge {
        Badge::Milionaria => Color::Yellow,
        Badge::Quatorze => Color::Green,
        Badge::Treze => Color::Cyan,
        _ => Color::White,
    }
}

pub fn display_games(games: &[RankedGame]) {
    println!("\n🎲 Jogos sugeridos\n");

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["#", "Dezenas", "13p", "14p", "R$ (100 conc.)", "Status"]);

    for (i, game) in games.iter().enumerate() {
        let badge = game.score.badge();
        table.add_row(vec![
            Cell::new(format!("{:02}", i + 1)),
            Cell::new(join_numbers(&game.numbers)),
            Cell::new(game.score.hits_for(13).to_string()),
            Cell::new(game.score.hits_for(14).to_string()),
            Cell::new(game.score.total.to_string()),
            Cell::new(badge.to_string()).fg(badge_color(badge)),
        ]);
    }

    println!("{table}");
}

pub fn display_outcome(outcome: &SearchOutcome) {
    if outcome.games.is_empty() {
        println!(
            "Nenhum jogo aprovado em {} tentativas. Tente novamente.",
            outcome.attempts
        );
        return;
    }

    display_games(&outcome.games);

    if outcome.exhausted {
        println!(
            "Busca encerrada em {} tentativas com {} jogo(s); cota não fechada. Tente novamente para completar.",
            outcome.attempts,
            outcome.games.len()
        );
    } else {
        println!(
            "{} jogo(s) em {} tentativas.",
            outcome.games.len(),
            outcome.attempts
        );
    }
}
