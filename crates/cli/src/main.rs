#![deny(warnings)]

use anyhow::Context;
use clap::{ArgGroup, Parser};
use mood_mirror_core::classify::{
    EmotionClassifier, HttpEmotionClassifier, HttpSentimentClassifier, LexiconEmotionClassifier,
    LexiconSentimentClassifier, SentimentClassifier,
};
use mood_mirror_core::config::{
    resolve_api_key, resolve_model, AppConfig, ClassifierTimeout, StdEnv,
    DEFAULT_EMOTION_MODEL, DEFAULT_SENTIMENT_MODEL, DEFAULT_TIMEOUT_MS, ENV_EMOTION_MODEL,
    ENV_HF_API_TOKEN, ENV_SENTIMENT_MODEL,
};
use mood_mirror_core::extract::{FeatureVector, FixedFeatureExtractor};
use mood_mirror_core::pipeline::Analyzer;
use mood_mirror_core::recommend::Catalog;
use mood_mirror_core::transcribe::FixedTranscriber;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "mood-mirror")]
#[command(about = "Mood inference and recommendations from text or extracted audio features")]
#[command(group(
    ArgGroup::new("input")
        .required(true)
        .multiple(false)
        .args(["text", "features"])
))]
struct Args {
    /// Utterance to analyze as text.
    #[arg(long)]
    text: Option<String>,

    /// Path to a JSON feature vector extracted from audio.
    #[arg(long)]
    features: Option<PathBuf>,

    /// Transcript accompanying --features.
    #[arg(long)]
    transcript: Option<String>,

    #[arg(long)]
    hf_api_token: Option<String>,

    #[arg(long)]
    sentiment_model: Option<String>,

    #[arg(long)]
    emotion_model: Option<String>,

    #[arg(long, default_value_t = DEFAULT_TIMEOUT_MS)]
    timeout_ms: u64,

    /// Use the built-in lexicon classifiers instead of the inference API.
    #[arg(long, default_value_t = false)]
    offline: bool,

    #[arg(long, default_value = "info")]
    log_level: String,
}

#[derive(Debug)]
enum Input {
    Text(String),
    Features {
        path: PathBuf,
        transcript: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(&args.log_level)?;

    let env = StdEnv;
    let (input, cfg) = build_config(args, &env)?;

    tracing::info!(
        sentiment_model = cfg.sentiment_model.as_str(),
        emotion_model = cfg.emotion_model.as_str(),
        offline = cfg.offline,
        "config loaded"
    );

    if cfg.offline {
        run(
            input,
            LexiconSentimentClassifier::new(),
            LexiconEmotionClassifier::new(),
        )
        .await
    } else {
        let token = cfg.api_token.as_ref().map(|k| k.expose().to_owned());
        let timeout = cfg.timeout.duration();
        let sentiment =
            HttpSentimentClassifier::new(cfg.sentiment_model.as_str(), token.clone(), timeout)?;
        let emotion = HttpEmotionClassifier::new(cfg.emotion_model.as_str(), token, timeout)?;
        run(input, sentiment, emotion).await
    }
}

async fn run<S, E>(input: Input, sentiment: S, emotion: E) -> anyhow::Result<()>
where
    S: SentimentClassifier,
    E: EmotionClassifier,
{
    let analyzer = Analyzer {
        extractor: FixedFeatureExtractor::new(FeatureVector::default()),
        transcriber: FixedTranscriber::default(),
        sentiment,
        emotion,
        catalog: Catalog::builtin(),
    };

    let payload = match input {
        Input::Text(text) => {
            let assessment = analyzer.analyze_text(&text).await?;
            let recommendations = analyzer.recommendations(
                assessment.mood.as_str(),
                assessment.energy,
                &assessment.detected_emotions,
            );
            serde_json::json!({
                "assessment": assessment,
                "recommendations": recommendations,
            })
        }
        Input::Features { path, transcript } => {
            let raw = std::fs::read_to_string(&path)
                .with_context(|| format!("reading {}", path.display()))?;
            let features: FeatureVector =
                serde_json::from_str(&raw).context("parsing feature vector json")?;
            let analysis = analyzer.analyze_voice(features, transcript.as_deref()).await?;
            let recommendations = analyzer.recommendations(
                analysis.assessment.mood.as_str(),
                analysis.assessment.energy,
                &analysis.assessment.detected_emotions,
            );
            serde_json::json!({
                "assessment": analysis.assessment,
                "transcript": analysis.transcript,
                "recommendations": recommendations,
                "game_recommendations": analysis.game_recommendations,
            })
        }
    };

    println!("{}", serde_json::to_string_pretty(&payload)?);
    Ok(())
}

fn init_tracing(level: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::builder()
        .with_default_directive(
            level
                .parse()
                .with_context(|| format!("invalid --log-level: {level}"))?,
        )
        .from_env_lossy();

    tracing_subscriber::fmt().with_env_filter(filter).init();
    Ok(())
}

fn build_config(
    args: Args,
    env: &impl mood_mirror_core::config::Env,
) -> anyhow::Result<(Input, AppConfig)> {
    let input = match (args.text, args.features) {
        (Some(t), None) => Input::Text(t),
        (None, Some(path)) => Input::Features {
            path,
            transcript: args.transcript,
        },
        _ => anyhow::bail!("exactly one of --text or --features must be provided"),
    };

    let sentiment_model = resolve_model(
        args.sentiment_model,
        ENV_SENTIMENT_MODEL,
        env,
        DEFAULT_SENTIMENT_MODEL,
    )?;
    let emotion_model = resolve_model(
        args.emotion_model,
        ENV_EMOTION_MODEL,
        env,
        DEFAULT_EMOTION_MODEL,
    )?;
    let api_token = resolve_api_key(args.hf_api_token, ENV_HF_API_TOKEN, env)?;
    let timeout = ClassifierTimeout::new(args.timeout_ms)?;

    Ok((
        input,
        AppConfig {
            sentiment_model,
            emotion_model,
            api_token,
            timeout,
            offline: args.offline,
        },
    ))
}
