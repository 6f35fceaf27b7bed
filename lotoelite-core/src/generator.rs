use anyhow::{bail, Result};
use chrono::Datelike;
use itertools::Itertools;
use rand::rngs::StdRng;
use rand::seq::{IndexedRandom, SliceRandom};
use serde::{Deserialize, Serialize};

use crate::filter::FilterConfig;
use crate::models::{Draw, RankedGame, GAME_SIZE, POOL_SIZE, UNIVERSE};
use crate::score::{score, PayoutTable};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Enumera todos os subconjuntos de 15 dezenas da base de 18.
    ExhaustivePool,
    /// Sorteia 15 dezenas da base de 18.
    RandomPool,
    /// Sorteia 15 dezenas do volante inteiro.
    RandomUniverse,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    pub strategy: Strategy,
    /// Quantidade de jogos aprovados que encerra a busca.
    pub quota: usize,
    /// Retorno mínimo no backtest para aceitar um jogo.
    pub min_profit: Option<u64>,
    /// Teto de tentativas; estourar o teto encerra a busca sem erro.
    pub max_attempts: usize,
    /// Exige ao menos um 15/15 histórico (busca milionária).
    pub require_top_tier: bool,
}

/// Desfecho de uma busca. `exhausted` indica que o teto de tentativas ou a
/// enumeração terminou antes de fechar a cota; nunca é um erro.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub games: Vec<RankedGame>,
    pub attempts: usize,
    pub exhausted: bool,
}

/// Seed determinístico derivado da data do dia (AAAAMMDD).
pub fn date_seed() -> u64 {
    let today = chrono::Local::now().date_naive();
    let y = today.year() as u64;
    let m = today.month() as u64;
    let d = today.day() as u64;
    y * 10_000 + m * 100 + d
}

/// Monta a base de 18 dezenas: as do ciclo, mais 9 sorteadas do último
/// concurso, completada com as demais dezenas embaralhadas.
pub fn build_pool(gap: &[u8], last_draw: &[u8; GAME_SIZE], rng: &mut StdRng) -> Result<Vec<u8>> {
    let mut pool: Vec<u8> = gap.to_vec();

    let sample_count = 9.min(POOL_SIZE.saturating_sub(pool.len()));
    let mut from_last: Vec<u8> = last_draw
        .iter()
        .filter(|n| !pool.contains(n))
        .copied()
        .collect();
    from_last.shuffle(rng);
    from_last.truncate(sample_count);
    pool.extend(from_last);

    let mut others: Vec<u8> = (1..=UNIVERSE).filter(|n| !pool.contains(n)).collect();
    others.shuffle(rng);
    while pool.len() < POOL_SIZE {
        match others.pop() {
            Some(n) => pool.push(n),
            None => break,
        }
    }
    pool.truncate(POOL_SIZE);

    if pool.len() < GAME_SIZE {
        bail!(
            "Base de dezenas insuficiente: {} (mínimo {})",
            pool.len(),
            GAME_SIZE
        );
    }
    pool.sort();
    Ok(pool)
}

/// Executa a busca do perfil. `progress` recebe o número da tentativa e
/// existe só para a barra de progresso da CLI.
pub fn search(
    config: &SearchConfig,
    filter: &FilterConfig,
    payout: &PayoutTable,
    draws: &[Draw],
    gap: &[u8],
    pool: &[u8],
    rng: &mut StdRng,
    mut progress: impl FnMut(usize),
) -> Result<SearchOutcome> {
    let last_draw = match draws.first() {
        Some(draw) => draw.numbers,
        None => bail!("Histórico vazio; sincronize antes de gerar"),
    };

    let mut outcome = match config.strategy {
        Strategy::ExhaustivePool => search_exhaustive(
            config, filter, payout, draws, gap, pool, &last_draw, rng, &mut progress,
        )?,
        Strategy::RandomPool | Strategy::RandomUniverse => search_random(
            config, filter, payout, draws, gap, pool, &last_draw, rng, &mut progress,
        )?,
    };

    // Classificação final: retorno decrescente, desempate pelas dezenas.
    outcome
        .games
        .sort_by(|a, b| b.score.total.cmp(&a.score.total).then(a.numbers.cmp(&b.numbers)));
    Ok(outcome)
}

fn search_exhaustive(
    config: &SearchConfig,
    filter: &FilterConfig,
    payout: &PayoutTable,
    draws: &[Draw],
    gap: &[u8],
    pool: &[u8],
    last_draw: &[u8; GAME_SIZE],
    rng: &mut StdRng,
    progress: &mut impl FnMut(usize),
) -> Result<SearchOutcome> {
    if pool.len() < GAME_SIZE {
        bail!(
            "Base de dezenas insuficiente: {} (mínimo {})",
            pool.len(),
            GAME_SIZE
        );
    }

    let mut combos: Vec<Vec<u8>> = pool.iter().copied().combinations(GAME_SIZE).collect();
    combos.shuffle(rng);

    let mut games: Vec<RankedGame> = Vec::new();
    let mut attempts = 0usize;

    for combo in combos.iter().take(config.max_attempts) {
        attempts += 1;
        progress(attempts);

        let mut numbers = [0u8; GAME_SIZE];
        numbers.copy_from_slice(combo);
        numbers.sort();

        if let Some(game) = evaluate(config, filter, payout, draws, gap, last_draw, numbers) {
            games.push(game);
            if games.len() >= config.quota {
                break;
            }
        }
    }

    let exhausted = games.len() < config.quota;
    Ok(SearchOutcome {
        games,
        attempts,
        exhausted,
    })
}

fn search_random(
    config: &SearchConfig,
    filter: &FilterConfig,
    payout: &PayoutTable,
    draws: &[Draw],
    gap: &[u8],
    pool: &[u8],
    last_draw: &[u8; GAME_SIZE],
    rng: &mut StdRng,
    progress: &mut impl FnMut(usize),
) -> Result<SearchOutcome> {
    let source: Vec<u8> = match config.strategy {
        Strategy::RandomPool => pool.to_vec(),
        _ => (1..=UNIVERSE).collect(),
    };
    if source.len() < GAME_SIZE {
        bail!(
            "Base de dezenas insuficiente: {} (mínimo {})",
            source.len(),
            GAME_SIZE
        );
    }

    let mut games: Vec<RankedGame> = Vec::new();
    let mut attempts = 0usize;

    while attempts < config.max_attempts && games.len() < config.quota {
        attempts += 1;
        progress(attempts);

        let mut numbers = [0u8; GAME_SIZE];
        for (slot, n) in numbers
            .iter_mut()
            .zip(source.choose_multiple(rng, GAME_SIZE))
        {
            *slot = *n;
        }
        numbers.sort();

        if games.iter().any(|g| g.numbers == numbers) {
            continue;
        }
        if let Some(game) = evaluate(config, filter, payout, draws, gap, last_draw, numbers) {
            games.push(game);
        }
    }

    let exhausted = games.len() < config.quota;
    Ok(SearchOutcome {
        games,
        attempts,
        exhausted,
    })
}

fn evaluate(
    config: &SearchConfig,
    filter: &FilterConfig,
    payout: &PayoutTable,
    draws: &[Draw],
    gap: &[u8],
    last_draw: &[u8; GAME_SIZE],
    numbers: [u8; GAME_SIZE],
) -> Option<RankedGame> {
    if !filter.passes(&numbers, last_draw, gap) {
        return None;
    }
    let result = score(&numbers, draws, payout);
    if config.require_top_tier && result.hits_for(15) == 0 {
        return None;
    }
    if let Some(min) = config.min_profit {
        if result.total < min {
            return None;
        }
    }
    Some(RankedGame {
        numbers,
        score: result,
    })
}
