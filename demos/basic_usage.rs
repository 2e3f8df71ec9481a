//! Basic usage of the enquete analysis pipeline.
//!
//! Builds a small synthetic response snapshot, prints the aggregate
//! summary, then runs the default breakdown (q2 by gender, plus the
//! age-bracket x gender two-way decomposition).

use enquete::prelude::*;

fn synthetic_records() -> Result<Vec<ResponseRecord>, Error> {
    let mut records = Vec::new();
    for i in 0..8u32 {
        let wobble = (i % 2) as u8;
        // Younger women rate the service high, older men low.
        records.push(ResponseRecord::new(
            22 + i,
            Gender::Female,
            320 + 40 * i,
            Disability::No,
            [4 + wobble; 10],
        )?);
        records.push(ResponseRecord::new(
            22 + i,
            Gender::Male,
            380 + 40 * i,
            Disability::No,
            [2 + wobble; 10],
        )?);
        records.push(ResponseRecord::new(
            51 + i,
            Gender::Female,
            520 + 40 * i,
            if i % 4 == 0 { Disability::Yes } else { Disability::No },
            [3 + wobble; 10],
        )?);
        records.push(ResponseRecord::new(
            51 + i,
            Gender::Male,
            560 + 40 * i,
            Disability::No,
            [1 + wobble; 10],
        )?);
    }
    Ok(records)
}

fn main() -> Result<(), Error> {
    let records = synthetic_records()?;

    let summary = summarize(&records);
    println!("=== Summary ({} respondents) ===", summary.respondent_count);
    for (label, count) in &summary.gender {
        println!("  gender {label}: {count}");
    }
    for (label, count) in &summary.age_groups {
        println!("  age {label}: {count}");
    }
    for question in QuestionId::ALL {
        if let Some(mean) = summary.mean_for(question) {
            println!("  {question} mean: {mean:.2}");
        }
    }

    let analysis = analyze(&records, &AnalysisConfig::default());

    println!("\n=== One-way ANOVA (q2 by gender) ===");
    match &analysis.one_way {
        Some(anova) => {
            println!(
                "  F({}, {}) = {:.3}, critical 0.05 = {:.2}, 0.01 = {:.2}",
                anova.df_between,
                anova.df_within,
                anova.f_value,
                anova.critical_value_05,
                anova.critical_value_01,
            );
            match anova.significance {
                Significance::P01 => println!("  significant at p < 0.01"),
                Significance::P05 => println!("  significant at p < 0.05"),
                Significance::NotSignificant => println!("  not significant"),
            }
        }
        None => println!("  not enough data"),
    }

    if let Some(pairs) = &analysis.tukey {
        println!("\n=== Tukey HSD ===");
        for pair in pairs {
            println!(
                "  {} vs {}: diff {:.3}, hsd {:.3} -> {}",
                pair.group_a,
                pair.group_b,
                pair.mean_difference,
                pair.hsd,
                if pair.significant { "differs" } else { "no difference" },
            );
        }
    }

    println!("\n=== Two-way ANOVA (age_group x gender) ===");
    match &analysis.two_way {
        Ok(result) => {
            let row = |name: &str, e: &FactorEffect| {
                println!(
                    "  {name:<12} ss {:8.3}  df {:>2}  ms {:7.3}  F {:7.3}  alpha {}",
                    e.ss,
                    e.df,
                    e.ms,
                    e.f_value,
                    e.significance.alpha(),
                );
            };
            row("factor A", &result.factor_a);
            row("factor B", &result.factor_b);
            row("interaction", &result.interaction);
            println!(
                "  {:<12} ss {:8.3}  df {:>2}  ms {:7.3}",
                "error", result.error.ss, result.error.df, result.error.ms
            );
            println!(
                "  {:<12} ss {:8.3}  df {:>2}",
                "total", result.total.ss, result.total.df
            );

            println!("  interaction series:");
            for (b_level, means) in result.interaction_series() {
                println!("    {b_level}: {means:?}");
            }
        }
        Err(reason) => println!("  skipped: {reason}"),
    }

    Ok(())
}
