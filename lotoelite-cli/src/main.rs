mod display;
mod interactive;

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::SeedableRng;

use lotoelite_core::generator::{build_pool, date_seed, search, SearchOutcome};
use lotoelite_core::models::POOL_SIZE;
use lotoelite_core::preset::Preset;
use lotoelite_core::provider::{fetch_history, LOTOFACIL_URL};
use lotoelite_core::report::render_report;
use lotoelite_core::session::LotteryData;
use lotoelite_core::trend::{cycle_gap, hot_numbers, TrendMode};

#[derive(Parser)]
#[command(
    name = "lotoelite",
    about = "Gerador de jogos da Lotofácil com filtros estatísticos e backtest"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Situação atual: concurso alvo, último sorteio, ciclo e dezenas quentes
    Status,

    /// Listar os últimos sorteios
    List {
        /// Quantidade de sorteios
        #[arg(short, long, default_value = "10")]
        last: usize,
    },

    /// Gerar jogos com um perfil de filtros
    Generate {
        /// Perfil de geração
        #[arg(short, long, value_enum, default_value = "elite")]
        preset: Preset,

        /// Quantidade de jogos (padrão: cota do perfil)
        #[arg(short, long)]
        count: Option<usize>,

        /// Seed para reprodutibilidade (padrão: data do dia AAAAMMDD)
        #[arg(long)]
        seed: Option<u64>,

        /// Arquivo de saída do relatório em texto
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Modo interativo (menu)
    Interactive,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Status => cmd_status(),
        Command::List { last } => cmd_list(last),
        Command::Generate {
            preset,
            count,
            seed,
            output,
        } => cmd_generate(preset, count, seed, output),
        Command::Interactive => interactive::run_interactive(),
    }
}

/// Toda falha de sincronização vira a mesma mensagem de "sem dados"; o
/// detalhe entre parênteses serve só de diagnóstico.
pub(crate) fn sync() -> Result<LotteryData> {
    match fetch_history(LOTOFACIL_URL) {
        Ok(data) => Ok(data),
        Err(e) => bail!("Sem dados ({}). Verifique sua conexão e tente novamente.", e),
    }
}

fn cmd_status() -> Result<()> {
    let data = sync()?;
    let gap = cycle_gap(&data.draws);
    let hot = hot_numbers(&data.draws, 10, POOL_SIZE);
    display::display_status(&data, &gap, &hot);
    Ok(())
}

fn cmd_list(last: usize) -> Result<()> {
    let data = sync()?;
    let count = last.min(data.draws.len());
    display::display_draws(&data.draws[..count]);
    Ok(())
}

fn cmd_generate(
    preset: Preset,
    count: Option<usize>,
    seed: Option<u64>,
    output: Option<PathBuf>,
) -> Result<()> {
    let data = sync()?;
    let seed = seed.unwrap_or_else(date_seed);

    println!(
        "Concurso alvo: {} | Perfil: {} | Seed: {}",
        data.next_contest(),
        preset.label(),
        seed
    );
    display::display_gap(&cycle_gap(&data.draws));

    let outcome = run_generation(&data, preset, count, seed)?;
    display::display_outcome(&outcome);

    if let Some(path) = output {
        if outcome.games.is_empty() {
            println!("Nada para exportar.");
        } else {
            let report = render_report(
                &outcome.games,
                data.next_contest(),
                chrono::Local::now().date_naive(),
            );
            std::fs::write(&path, report)
                .with_context(|| format!("Não foi possível gravar {:?}", path))?;
            println!("Relatório gravado em {:?}", path);
        }
    }
    Ok(())
}

/// Monta a base de dezenas do perfil e executa a busca com barra de
/// progresso. Compartilhado entre o subcomando `generate` e o modo interativo.
pub(crate) fn run_generation(
    data: &LotteryData,
    preset: Preset,
    count: Option<usize>,
    seed: u64,
) -> Result<SearchOutcome> {
    let config = preset.config();
    let mut search_config = config.search.clone();
    if let Some(n) = count {
        search_config.quota = n;
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let gap = cycle_gap(&data.draws);
    let pool = match config.trend {
        TrendMode::CycleGap => {
            let last = data.last_draw().context("Histórico vazio")?;
            build_pool(&gap, &last.numbers, &mut rng)?
        }
        TrendMode::Hot { window } => hot_numbers(&data.draws, window, POOL_SIZE),
    };

    let pb = ProgressBar::new(search_config.max_attempts as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} tentativas")
            .unwrap()
            .progress_chars("=> "),
    );

    let outcome = search(
        &search_config,
        &config.filter,
        &config.payout,
        &data.draws,
        &gap,
        &pool,
        &mut rng,
        |attempt| pb.set_position(attempt as u64),
    )?;
    pb.finish_and_clear();

    Ok(outcome)
}
