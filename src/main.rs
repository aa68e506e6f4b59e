use anyhow::{Context, Result};
use jamboree_core::tree::{TreeEvaluator, TreePosition};
use jamboree_core::Depth;
use jamboree_engine::{
    AlphaBetaSearcher, JamboreeSearcher, MinimaxSearcher, ParallelSearcher, SearchConfig, Searcher,
};
use tracing::info;

/// Four root moves over three plies; the capture allows a mating reply.
const DEMO_TREE: &str = "0(\
    x40(-30(10 -5) -100000+) \
    10(-15(20 25 x30) -8(12 x9) -20(16 18)) \
    5(x-25(30 35) -12(4 15 22)) \
    -3(-6(2 8) 0(7 11 6))\
)";

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let mut args = std::env::args().skip(1);
    let mut config = SearchConfig::default().with_depth(3);
    if let Some(depth) = args.next() {
        let depth: Depth = depth.parse().with_context(|| format!("invalid depth {depth:?}"))?;
        config = config.with_depth(depth);
    }
    if let Some(threads) = args.next() {
        let threads: usize = threads
            .parse()
            .with_context(|| format!("invalid thread count {threads:?}"))?;
        config = config.with_threads(threads);
    }
    config.validate().context("invalid search configuration")?;

    let position: TreePosition = DEMO_TREE.parse().context("demo tree does not parse")?;
    info!(tree = %position.tree(), depth = config.depth, "jamboree starting");

    let eval = TreeEvaluator::default();
    let minimax = MinimaxSearcher::new(eval, config)?;
    let alphabeta: AlphaBetaSearcher<TreeEvaluator> = AlphaBetaSearcher::new(eval, config)?;
    let parallel: ParallelSearcher<TreeEvaluator> = ParallelSearcher::new(eval, config)?;
    let jamboree: JamboreeSearcher<TreeEvaluator> = JamboreeSearcher::new(eval, config)?;
    info!(threads = jamboree.pool().num_threads(), "worker pools ready");

    let searchers: [&dyn Searcher<TreePosition>; 4] = [&minimax, &alphabeta, &parallel, &jamboree];
    for searcher in searchers {
        let mut position = position.clone();
        let result = searcher.search_default(&mut position);
        info!(
            engine = searcher.name(),
            score = result.score,
            best_move = %result.mv.map_or_else(|| "none".to_owned(), |mv| mv.to_string()),
            "engine finished"
        );
    }

    Ok(())
}
