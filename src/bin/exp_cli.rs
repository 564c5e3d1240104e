use cordic_exp::validation::{
    evaluate_sweep, run_accuracy_check, sanity_table, save_csv, sweep_metrics, SweepConfig,
    ValidationConfig,
};
use cordic_exp::core::evaluator::below_domain;
use cordic_exp::{CordicConfiguration, ExpEvaluator, FixedFormat, Q4_12};
use anyhow::{anyhow, Context, Result};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::process;

/// 진행 표시 단위
const SWEEP_CHUNK: usize = 1024;

fn main() {
    env_logger::init();

    let matches = Command::new("exp CLI")
        .version("0.1.0")
        .about("쌍곡 CORDIC 고정소수점 exp(x), x ∈ [-8, 0]")
        .subcommand(
            Command::new("eval")
                .about("입력값 평가")
                .arg(
                    Arg::new("x")
                        .required(true)
                        .num_args(1..)
                        .allow_negative_numbers(true)
                        .value_parser(value_parser!(f64))
                        .help("평가할 값들 (Q4.12 격자로 양자화)")
                )
                .arg(stages_arg())
        )
        .subcommand(Command::new("sanity").about("고정 입력점 새니티 표").arg(stages_arg()))
        .subcommand(
            Command::new("validate")
                .about("MSE 신뢰구간 검증")
                .arg(
                    Arg::new("samples")
                        .long("samples")
                        .short('n')
                        .value_name("COUNT")
                        .value_parser(value_parser!(usize))
                        .default_value("200000")
                        .help("샘플 수")
                )
                .arg(
                    Arg::new("seed")
                        .long("seed")
                        .value_name("SEED")
                        .value_parser(value_parser!(u32))
                        .default_value("305419896")
                        .help("xorshift32 시드")
                )
                .arg(
                    Arg::new("limit")
                        .long("limit")
                        .value_name("MSE")
                        .value_parser(value_parser!(f64))
                        .default_value("2.4e-11")
                        .help("MSE 예산")
                )
                .arg(stages_arg())
                .arg(derive_arg())
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("결과를 JSON으로 출력")
                )
        )
        .subcommand(
            Command::new("sweep")
                .about("균일 스윕 후 CSV 저장 및 MSE 출력")
                .arg(
                    Arg::new("start")
                        .long("start")
                        .allow_negative_numbers(true)
                        .value_parser(value_parser!(f64))
                        .default_value("-8.0")
                        .help("시작값")
                )
                .arg(
                    Arg::new("end")
                        .long("end")
                        .allow_negative_numbers(true)
                        .value_parser(value_parser!(f64))
                        .default_value("0.1")
                        .help("끝값 (미포함)")
                )
                .arg(
                    Arg::new("step")
                        .long("step")
                        .value_parser(value_parser!(f64))
                        .default_value("0.00025")
                        .help("간격")
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .value_name("FILE")
                        .value_parser(value_parser!(PathBuf))
                        .help("CSV 출력 경로")
                )
                .arg(stages_arg())
        )
        .subcommand(
            Command::new("info")
                .about("구성과 atanh 테이블 출력")
                .arg(stages_arg())
        )
        .get_matches();

    let result = match matches.subcommand() {
        Some(("eval", sub_matches)) => handle_eval(sub_matches),
        Some(("sanity", sub_matches)) => handle_sanity(sub_matches),
        Some(("validate", sub_matches)) => handle_validate(sub_matches),
        Some(("sweep", sub_matches)) => handle_sweep(sub_matches),
        Some(("info", sub_matches)) => handle_info(sub_matches),
        _ => {
            println!("❌ 명령을 지정해주세요. --help를 참조하세요.");
            process::exit(1);
        }
    };

    match result {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            eprintln!("❌ 오류: {:#}", e);
            process::exit(1);
        }
    }
}

fn stages_arg() -> Arg {
    Arg::new("stages")
        .long("stages")
        .value_name("N")
        .value_parser(value_parser!(usize))
        .help("최대 시프트 인덱스 (기본 15)")
}

fn derive_arg() -> Arg {
    Arg::new("derive")
        .long("derive")
        .action(ArgAction::SetTrue)
        .help("단계 수에 맞춰 반복 스케줄과 게인 역수를 다시 유도")
}

/// --stages만 주면 기본 게인/스케줄을 유지한다 (오구성 실험용).
/// --derive를 함께 주면 유도값을 쓴다.
fn build_evaluator(matches: &ArgMatches) -> Result<ExpEvaluator> {
    let derive = matches
        .try_get_one::<bool>("derive")
        .ok()
        .flatten()
        .copied()
        .unwrap_or(false);

    let config = match matches.get_one::<usize>("stages") {
        Some(&stages) if derive => CordicConfiguration::derived(stages),
        Some(&stages) => CordicConfiguration {
            stages,
            ..CordicConfiguration::default()
        },
        None => CordicConfiguration::default(),
    };

    ExpEvaluator::new(config).context("평가기 구성 실패")
}

fn handle_eval(matches: &ArgMatches) -> Result<bool> {
    let evaluator = build_evaluator(matches)?;
    let xs = matches
        .get_many::<f64>("x")
        .ok_or_else(|| anyhow!("입력값이 필요함"))?;

    println!(
        "{:>12} {:>10} {:>8} {:>10} {:>14} {:>14} {:>12}",
        "x", "x_q", "x_raw", "y_raw", "exp_cordic", "exp_ref", "error"
    );
    for &x in xs {
        let input = Q4_12::quantize(x);
        let output = evaluator.evaluate_real(x);
        // 정의역 아래는 계약상 0
        let reference = if below_domain(x) { 0.0 } else { input.to_f64().exp() };
        println!(
            "{:>12.6} {:>10.6} {:>8} {:>#10x} {:>14.10} {:>14.10} {:>12.3e}",
            x,
            input.to_f64(),
            input.to_raw(),
            output.to_raw(),
            output.to_f64(),
            reference,
            output.to_f64() - reference
        );
    }
    Ok(true)
}

fn handle_sanity(matches: &ArgMatches) -> Result<bool> {
    let evaluator = build_evaluator(matches)?;
    let config = evaluator.config();

    println!("CORDIC 단계 (최대 시프트 i): {}", config.stages);
    println!("의사 회전 수 (반복 포함): {}\n", config.pseudo_rotations());

    for row in sanity_table(&evaluator) {
        println!(
            "SANITY: x={:>10.6} (q={:>10.6})  exp_cordic={:.10}  ref={:.10}  err={:+.3e}",
            row.x,
            row.quantized,
            row.evaluated,
            row.reference,
            row.error()
        );
    }
    Ok(true)
}

fn handle_validate(matches: &ArgMatches) -> Result<bool> {
    let evaluator = build_evaluator(matches)?;
    let defaults = ValidationConfig::default();
    let config = ValidationConfig {
        samples: matches.get_one::<usize>("samples").copied().unwrap_or(defaults.samples),
        seed: matches.get_one::<u32>("seed").copied().unwrap_or(defaults.seed),
        mse_limit: matches.get_one::<f64>("limit").copied().unwrap_or(defaults.mse_limit),
    };

    let report = run_accuracy_check(&evaluator, &config)?;

    if matches.get_flag("json") {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("CORDIC 단계: {}, 의사 회전 수: {}\n", evaluator.config().stages, evaluator.config().pseudo_rotations());
        report.report();
    }

    Ok(report.passed())
}

fn handle_sweep(matches: &ArgMatches) -> Result<bool> {
    let evaluator = build_evaluator(matches)?;
    let defaults = SweepConfig::default();
    let config = SweepConfig {
        start: matches.get_one::<f64>("start").copied().unwrap_or(defaults.start),
        end: matches.get_one::<f64>("end").copied().unwrap_or(defaults.end),
        step: matches.get_one::<f64>("step").copied().unwrap_or(defaults.step),
    };

    let xs = config.inputs()?;
    println!("🔢 스윕 입력 {}개 생성 (간격 {})", xs.len(), config.step);

    let pb = ProgressBar::new(xs.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{bar:40}] {percent}% 입력 {pos}/{len} 평가 중")
            .context("진행 표시 템플릿 오류")?,
    );

    let mut rows = Vec::with_capacity(xs.len());
    for chunk in xs.chunks(SWEEP_CHUNK) {
        rows.extend(evaluate_sweep(&evaluator, chunk));
        pb.inc(chunk.len() as u64);
    }
    pb.finish_and_clear();

    if let Some(path) = matches.get_one::<PathBuf>("output") {
        save_csv(&rows, path)?;
        println!("💾 저장 완료: {}", path.display());
    }

    sweep_metrics(&rows).report("스윕");
    Ok(true)
}

fn handle_info(matches: &ArgMatches) -> Result<bool> {
    let evaluator = build_evaluator(matches)?;
    let table: Vec<i32> = cordic_exp::core::cordic::AtanhTable::new()
        .entries()
        .iter()
        .map(|e| e.to_raw())
        .collect();

    let info = serde_json::json!({
        "config": evaluator.config(),
        "pseudo_rotations": evaluator.config().pseudo_rotations(),
        "gain_inverse_q3_29": cordic_exp::Q3_29::from_f64(evaluator.config().gain_inverse).to_raw(),
        "atanh_table_q3_29": table,
    });
    println!("{}", serde_json::to_string_pretty(&info)?);
    Ok(true)
}
