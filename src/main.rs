//! corpus-scrub 命令行入口
//! 子命令：
//! 1. prune  - 按文档频率阈值剪枝语料
//! 2. strip  - 遍历邮件目录并剥离样板文本
//! 3. topics - 输出外部主题模型每个主题的前 N 个词

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use corpus_scrub::utils::preview_compact;
use corpus_scrub::{
    strip_batch, BoilerplateStripper, ConfigManager, CorpusStore, MailCollector,
    PipelineConfig, RuleSetKind, RuleSpec, TopicModelOutput, VocabularyPruner,
};

#[derive(Debug, Parser)]
#[command(name = "corpus-scrub", version, about = "Corpus normalization for text mining")]
struct Cli {
    /// JSON 配置文件（命令行参数优先）
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// 输出 debug 级别日志
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Remove too-rare and too-common terms from a tokenized corpus
    Prune(PruneArgs),
    /// Strip headers, quoted blocks and signatures from a directory of emails
    Strip(StripArgs),
    /// Print the top words of each topic from a topic-word matrix
    Topics(TopicsArgs),
}

#[derive(Debug, Args)]
struct PruneArgs {
    /// term -> document frequency (JSON object or .mp)
    #[arg(long)]
    vocab: PathBuf,
    /// tokenized documents (JSON array of arrays or .mp)
    #[arg(long)]
    corpus: PathBuf,
    #[arg(long)]
    out: PathBuf,
    /// terms in this many or fewer documents are noise
    #[arg(long, allow_hyphen_values = true)]
    low: Option<i64>,
    /// terms in at least this fraction of documents are noise
    #[arg(long, allow_hyphen_values = true)]
    high: Option<f64>,
    /// document count used for the fraction (defaults to the corpus length)
    #[arg(long)]
    documents: Option<u64>,
}

#[derive(Debug, Args)]
struct StripArgs {
    /// root directory of the mail store
    #[arg(long)]
    root: PathBuf,
    #[arg(long)]
    out: PathBuf,
    /// use the extended rule set
    #[arg(long)]
    extended: bool,
    /// JSON file with an ordered list of {name, pattern, replacement}
    #[arg(long)]
    rules: Option<PathBuf>,
    /// decode non-UTF-8 files lossily instead of skipping them
    #[arg(long)]
    lossy: bool,
}

#[derive(Debug, Args)]
struct TopicsArgs {
    /// {params, vocabulary, topic_word} produced by the topic model
    #[arg(long)]
    model: PathBuf,
    #[arg(long, default_value_t = 3)]
    top: usize,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => ConfigManager::load(path)
            .await
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => ConfigManager::get_default(),
    };
    init_logging(cli.verbose || config.verbose);

    match cli.command {
        Command::Prune(args) => run_prune(args, config).await,
        Command::Strip(args) => run_strip(args, config).await,
        Command::Topics(args) => run_topics(args).await,
    }
}

async fn run_prune(args: PruneArgs, mut config: PipelineConfig) -> Result<()> {
    if let Some(low) = args.low {
        config.prune.low_threshold = low;
    }
    if let Some(high) = args.high {
        config.prune.high_fraction = high;
    }
    if args.documents.is_some() {
        config.prune.total_documents = args.documents;
    }
    let pruner = VocabularyPruner::from_config(&config.prune).context("invalid prune configuration")?;

    let vocabulary = CorpusStore::load_vocabulary(&args.vocab)
        .await
        .with_context(|| format!("failed to load vocabulary {}", args.vocab.display()))?;
    let corpus = CorpusStore::load_corpus(&args.corpus)
        .await
        .with_context(|| format!("failed to load corpus {}", args.corpus.display()))?;

    let start = Instant::now();
    let (pruned, stats) = pruner.prune_with_stats(&vocabulary, &corpus)?;
    stats.print_stats(start.elapsed());

    CorpusStore::save_corpus(&args.out, &pruned)
        .await
        .with_context(|| format!("failed to write {}", args.out.display()))?;
    info!(
        "Pruned {} noise terms, {} -> {} tokens across {} documents",
        stats.noise_terms(),
        stats.tokens_before,
        stats.tokens_after,
        pruned.len()
    );
    Ok(())
}

async fn run_strip(args: StripArgs, mut config: PipelineConfig) -> Result<()> {
    if args.extended {
        config.strip.rule_set = RuleSetKind::Extended;
    }
    if let Some(path) = &args.rules {
        let rules: Vec<RuleSpec> = CorpusStore::load(path)
            .await
            .with_context(|| format!("failed to load rules {}", path.display()))?;
        config.strip.rules = rules;
    }
    let rule_set = config.strip.build_rule_set().context("invalid strip rules")?;
    debug!("Using rule set `{}` with {} rule(s)", rule_set.name(), rule_set.len());
    let stripper = BoilerplateStripper::new(rule_set);

    let report = MailCollector::new(&args.root)
        .with_lossy_utf8(args.lossy)
        .collect_report()
        .await;
    let cleaned = strip_batch(&report.items, &stripper);
    for email in &cleaned {
        debug!("{} -> {}", email.id, preview_compact(&email.text, 80));
    }

    CorpusStore::save(&args.out, &cleaned)
        .await
        .with_context(|| format!("failed to write {}", args.out.display()))?;

    if !report.skipped.is_empty() {
        warn!("{} of {} item(s) skipped", report.skipped.len(), report.total());
    }
    info!("Stripped {} email(s) into {}", cleaned.len(), args.out.display());
    Ok(())
}

async fn run_topics(args: TopicsArgs) -> Result<()> {
    let output: TopicModelOutput = CorpusStore::load(&args.model)
        .await
        .with_context(|| format!("failed to load topic model {}", args.model.display()))?;
    debug!(
        "Topic model params: topics={} iterations={} seed={}",
        output.params.n_topics, output.params.n_iter, output.params.random_state
    );
    for topic in output.top_words(args.top)? {
        println!("{}", topic);
    }
    Ok(())
}
