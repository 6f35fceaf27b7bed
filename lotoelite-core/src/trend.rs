use serde::{Deserialize, Serialize};

use crate::models::{Draw, UNIVERSE};

/// Sinal de tendência que alimenta a base de dezenas de um perfil.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendMode {
    /// Dezenas ausentes do ciclo em aberto.
    CycleGap,
    /// Dezenas mais frequentes na janela recente.
    Hot { window: usize },
}

/// Dezenas que ainda não saíram desde o início do ciclo atual, varrendo do
/// concurso mais recente para trás. Quando um concurso fecha a cobertura das
/// 25 dezenas, o conjunto retido é o complemento de antes desse concurso.
pub fn cycle_gap(draws: &[Draw]) -> Vec<u8> {
    let mut seen = [false; UNIVERSE as usize];
    let mut seen_count = 0usize;
    let mut gap: Vec<u8> = Vec::new();

    for draw in draws {
        for &n in &draw.numbers {
            let idx = (n - 1) as usize;
            if !seen[idx] {
                seen[idx] = true;
                seen_count += 1;
            }
        }
        if seen_count == UNIVERSE as usize {
            break;
        }
        gap = (1..=UNIVERSE).filter(|&n| !seen[(n - 1) as usize]).collect();
    }

    gap
}

/// As `take` dezenas mais frequentes nos últimos `window` concursos.
/// Desempate determinístico: frequência decrescente, depois dezena crescente.
pub fn hot_numbers(draws: &[Draw], window: usize, take: usize) -> Vec<u8> {
    let mut freq = [0u32; UNIVERSE as usize];
    for draw in draws.iter().take(window) {
        for &n in &draw.numbers {
            freq[(n - 1) as usize] += 1;
        }
    }

    let mut numbers: Vec<u8> = (1..=UNIVERSE).collect();
    numbers.sort_by(|&a, &b| {
        freq[(b - 1) as usize]
            .cmp(&freq[(a - 1) as usize])
            .then(a.cmp(&b))
    });
    numbers.truncate(take);
    numbers
}
