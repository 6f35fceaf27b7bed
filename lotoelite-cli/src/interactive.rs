use std::fs;
use std::io::{self, Write};

use anyhow::{anyhow, bail, Context, Result};

use lotoelite_core::generator::date_seed;
use lotoelite_core::models::POOL_SIZE;
use lotoelite_core::preset::Preset;
use lotoelite_core::report::render_report;
use lotoelite_core::session::Session;
use lotoelite_core::trend::{cycle_gap, hot_numbers};

use crate::display;

#[derive(Debug, PartialEq)]
enum InteractiveCommand {
    Sync,
    Generate,
    Games,
    Export,
    History,
    Quit,
}

fn parse_command(input: &str) -> Option<InteractiveCommand> {
    match input.trim().to_lowercase().as_str() {
        "1" | "sincronizar" | "sync" => Some(InteractiveCommand::Sync),
        "2" | "gerar" | "gen" => Some(InteractiveCommand::Generate),
        "3" | "jogos" | "games" => Some(InteractiveCommand::Games),
        "4" | "exportar" | "export" | "exp" => Some(InteractiveCommand::Export),
        "5" | "historico" | "histórico" | "hist" => Some(InteractiveCommand::History),
        "6" | "sair" | "quit" | "q" | "exit" => Some(InteractiveCommand::Quit),
        _ => None,
    }
}

fn display_menu() {
    println!();
    println!("── LotoElite ──");
    println!("  1. sincronizar  Buscar resultados");
    println!("  2. gerar        Gerar jogos");
    println!("  3. jogos        Jogos da sessão");
    println!("  4. exportar     Gravar relatório em texto");
    println!("  5. historico    Últimos sorteios");
    println!("  6. sair         Sair");
    println!();
}

fn prompt(msg: &str) -> Result<String> {
    print!("{}", msg);
    io::stdout().flush()?;
    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .context("Erro de leitura")?;
    Ok(input.trim().to_string())
}

fn prompt_with_default(msg: &str, default: &str) -> Result<String> {
    let input = prompt(&format!("{} [{}] : ", msg, default))?;
    if input.is_empty() {
        Ok(default.to_string())
    } else {
        Ok(input)
    }
}

fn cmd_sync(session: &mut Session) -> Result<()> {
    let data = super::sync()?;
    let gap = cycle_gap(&data.draws);
    let hot = hot_numbers(&data.draws, 10, POOL_SIZE);
    display::display_status(&data, &gap, &hot);
    session.data = Some(data);
    Ok(())
}

fn cmd_generate(session: &mut Session) -> Result<()> {
    let Some(data) = session.data.as_ref() else {
        bail!("Sincronize primeiro (opção 1)");
    };

    let preset_input =
        prompt_with_default("Perfil (elite, equilibrado, relampago, milionaria)", "elite")?;
    let preset = <Preset as clap::ValueEnum>::from_str(&preset_input, true)
        .map_err(|_| anyhow!("Perfil desconhecido: '{}'", preset_input))?;

    let seed_str = prompt_with_default("Seed (vazio = data do dia)", "")?;
    let seed: u64 = if seed_str.is_empty() {
        date_seed()
    } else {
        seed_str.parse().context("Seed inválido")?
    };

    let outcome = super::run_generation(data, preset, None, seed)?;
    display::display_outcome(&outcome);

    // Substituição integral do conjunto da sessão, mesmo quando vazio.
    session.games = outcome.games;
    Ok(())
}

fn cmd_games(session: &Session) -> Result<()> {
    if session.games.is_empty() {
        println!("Nenhum jogo gerado nesta sessão.");
    } else {
        display::display_games(&session.games);
    }
    Ok(())
}

fn cmd_export(session: &Session) -> Result<()> {
    let Some(data) = session.data.as_ref() else {
        bail!("Sincronize primeiro (opção 1)");
    };
    if session.games.is_empty() {
        bail!("Nenhum jogo para exportar; gere antes (opção 2)");
    }

    let path = prompt_with_default("Arquivo de saída", "jogos_lotofacil.txt")?;
    let report = render_report(
        &session.games,
        data.next_contest(),
        chrono::Local::now().date_naive(),
    );
    fs::write(&path, report).with_context(|| format!("Não foi possível gravar {}", path))?;
    println!("Relatório gravado em {}", path);
    Ok(())
}

fn cmd_history(session: &Session) -> Result<()> {
    let Some(data) = session.data.as_ref() else {
        bail!("Sincronize primeiro (opção 1)");
    };
    let n_str = prompt_with_default("Quantidade de sorteios", "10")?;
    let n: usize = n_str.parse().context("Quantidade inválida")?;
    let count = n.min(data.draws.len());
    display::display_draws(&data.draws[..count]);
    Ok(())
}

pub fn run_interactive() -> Result<()> {
    println!("Bem-vindo ao LotoElite!");
    let mut session = Session::default();

    loop {
        display_menu();
        let input = match prompt("> ") {
            Ok(s) => s,
            Err(_) => break, // EOF / Ctrl+D
        };

        if input.is_empty() {
            continue;
        }

        match parse_command(&input) {
            Some(InteractiveCommand::Quit) => {
                println!("Até a próxima!");
                break;
            }
            Some(InteractiveCommand::Sync) => {
                if let Err(e) = cmd_sync(&mut session) {
                    println!("Erro: {e:#}");
                }
            }
            Some(InteractiveCommand::Generate) => {
                if let Err(e) = cmd_generate(&mut session) {
                    println!("Erro: {e:#}");
                }
            }
            Some(InteractiveCommand::Games) => {
                if let Err(e) = cmd_games(&session) {
                    println!("Erro: {e:#}");
                }
            }
            Some(InteractiveCommand::Export) => {
                if let Err(e) = cmd_export(&session) {
                    println!("Erro: {e:#}");
                }
            }
            Some(InteractiveCommand::History) => {
                if let Err(e) = cmd_history(&session) {
                    println!("Erro: {e:#}");
                }
            }
            None => {
                println!(
                    "Comando desconhecido: '{}'. Digite um número (1-6) ou o nome do comando.",
                    input
                );
            }
        }
    }

    Ok(())
}
