use rayon::prelude::*;

use crate::core::actions::draw_fractal::draw_fractal::draw_fractal;
use crate::core::actions::draw_fractal::ports::fractal_rules::FractalRules;
use crate::core::data::display_list::DisplayList;
use crate::core::data::draw_stats::DrawStats;
use crate::core::data::render_config::RenderConfig;

#[derive(Debug, Clone, PartialEq)]
pub struct RenderedDrawing {
    pub drawing: DisplayList,
    pub stats: DrawStats,
}

/// Draws every job onto its own display list using rayon's work-stealing
/// scheduler. Results come back in job order.
pub fn draw_fractals_rayon<R>(jobs: &[(R, RenderConfig)]) -> Vec<RenderedDrawing>
where
    R: FractalRules + Sync,
{
    jobs.par_iter()
        .map(|(rules, config)| {
            let mut drawing = DisplayList::new();
            let stats = draw_fractal(rules, &mut drawing, config);

            RenderedDrawing { drawing, stats }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fractals::fractal_kinds::FractalKinds;

    fn jobs(max_level: u32) -> Vec<(FractalKinds, RenderConfig)> {
        FractalKinds::ALL
            .iter()
            .map(|&kind| (kind, RenderConfig::new(max_level, kind.default_palette()).unwrap()))
            .collect()
    }

    #[test]
    fn test_rayon_generates_same_results_as_sequential() {
        let jobs = jobs(3);

        let parallel = draw_fractals_rayon(&jobs);

        assert_eq!(parallel.len(), jobs.len());
        for ((kind, config), rendered) in jobs.iter().zip(&parallel) {
            let mut drawing = DisplayList::new();
            let stats = draw_fractal(kind, &mut drawing, config);

            assert_eq!(rendered.stats, stats);
            assert_eq!(rendered.drawing, drawing);
        }
    }

    #[test]
    fn test_rayon_same_fractal_many_times() {
        let config = RenderConfig::new(4, FractalKinds::FractalTree.default_palette()).unwrap();
        let jobs = vec![(FractalKinds::FractalTree, config); 16];

        let rendered = draw_fractals_rayon(&jobs);

        assert!(rendered.windows(2).all(|pair| pair[0] == pair[1]));
        assert_eq!(rendered[0].stats.terminals, 16);
    }

    #[test]
    fn test_rayon_with_no_jobs() {
        let jobs: Vec<(FractalKinds, RenderConfig)> = Vec::new();

        assert!(draw_fractals_rayon(&jobs).is_empty());
    }
}
