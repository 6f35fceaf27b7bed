use serde::{Deserialize, Serialize};

use crate::filter::FilterConfig;
use crate::generator::{SearchConfig, Strategy};
use crate::score::PayoutTable;
use crate::trend::TrendMode;

/// Perfis nomeados de geração. Cada antigo script-variante vira um valor de
/// configuração do mesmo motor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    /// Enumeração da base de 18 com quadrantes, primos e ciclo.
    Elite,
    /// Bateria completa de filtros, cota de 50 jogos.
    Equilibrado,
    /// Sorteio rápido da base de dezenas quentes.
    Relampago,
    /// Caça ao 15/15 histórico no volante inteiro.
    Milionaria,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PresetConfig {
    pub trend: TrendMode,
    pub filter: FilterConfig,
    pub payout: PayoutTable,
    pub search: SearchConfig,
}

impl Preset {
    pub fn config(&self) -> PresetConfig {
        match self {
            Preset::Elite => PresetConfig {
                trend: TrendMode::CycleGap,
                filter: FilterConfig {
                    quadrant_max: Some(6),
                    prime_count: Some(5..=7),
                    gap_fraction: Some(0.6),
                    ..Default::default()
                },
                payout: PayoutTable::STANDARD,
                search: SearchConfig {
                    strategy: Strategy::ExhaustivePool,
                    quota: 24,
                    min_profit: Some(65),
                    max_attempts: 816,
                    require_top_tier: false,
                },
            },
            Preset::Equilibrado => PresetConfig {
                trend: TrendMode::CycleGap,
                filter: FilterConfig {
                    odd_count: Some(7..=9),
                    quadrant_max: Some(6),
                    prime_count: Some(5..=7),
                    gap_fraction: Some(0.5),
                    repeat_count: Some(8..=10),
                    sum_range: Some(160..=220),
                    max_run: Some(4),
                    frame_count: Some(7..=10),
                },
                payout: PayoutTable::STANDARD,
                search: SearchConfig {
                    strategy: Strategy::ExhaustivePool,
                    quota: 50,
                    min_profit: Some(65),
                    max_attempts: 816,
                    require_top_tier: false,
                },
            },
            Preset::Relampago => PresetConfig {
                trend: TrendMode::Hot { window: 10 },
                filter: FilterConfig {
                    odd_count: Some(7..=9),
                    repeat_count: Some(8..=10),
                    sum_range: Some(160..=220),
                    ..Default::default()
                },
                payout: PayoutTable::STANDARD,
                search: SearchConfig {
                    strategy: Strategy::RandomPool,
                    quota: 10,
                    min_profit: None,
                    max_attempts: 1000,
                    require_top_tier: false,
                },
            },
            Preset::Milionaria => PresetConfig {
                trend: TrendMode::CycleGap,
                filter: FilterConfig {
                    quadrant_max: Some(6),
                    prime_count: Some(5..=7),
                    ..Default::default()
                },
                payout: PayoutTable::JACKPOT,
                search: SearchConfig {
                    strategy: Strategy::RandomUniverse,
                    quota: 1,
                    min_profit: None,
                    max_attempts: 20_000,
                    require_top_tier: true,
                },
            },
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Preset::Elite => "Elite (24 jogos)",
            Preset::Equilibrado => "Equilibrado (50 jogos)",
            Preset::Relampago => "Relâmpago (10 jogos)",
            Preset::Milionaria => "Milionária (15/15 histórico)",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elite_matches_original_thresholds() {
        let config = Preset::Elite.config();
        assert_eq!(config.filter.gap_fraction, Some(0.6));
        assert_eq!(config.filter.quadrant_max, Some(6));
        assert_eq!(config.filter.prime_count, Some(5..=7));
        assert_eq!(config.search.quota, 24);
        assert_eq!(config.search.min_profit, Some(65));
        assert_eq!(config.search.strategy, Strategy::ExhaustivePool);
        assert_eq!(config.payout.fifteen, 1_000_000);
    }

    #[test]
    fn test_every_search_is_bounded() {
        for preset in [
            Preset::Elite,
            Preset::Equilibrado,
            Preset::Relampago,
            Preset::Milionaria,
        ] {
            let config = preset.config();
            assert!(
                config.search.max_attempts > 0,
                "{:?} sem teto de tentativas",
                preset
            );
        }
    }

    #[test]
    fn test_milionaria_requires_top_tier() {
        let config = Preset::Milionaria.config();
        assert!(config.search.require_top_tier);
        assert_eq!(config.search.quota, 1);
        assert_eq!(config.payout.fifteen, 1_500_000);
        assert_eq!(config.search.strategy, Strategy::RandomUniverse);
    }

    #[test]
    fn test_relampago_uses_hot_pool() {
        let config = Preset::Relampago.config();
        assert_eq!(config.trend, TrendMode::Hot { window: 10 });
        assert_eq!(config.search.strategy, Strategy::RandomPool);
        assert_eq!(config.search.max_attempts, 1000);
    }

    #[test]
    fn test_preset_config_serde_roundtrip() {
        let config = Preset::Equilibrado.config();
        let json = serde_json::to_string(&config).unwrap();
        let restored: PresetConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.search.quota, config.search.quota);
        assert_eq!(restored.filter.sum_range, config.filter.sum_range);
        assert_eq!(restored.trend, config.trend);
    }
}
