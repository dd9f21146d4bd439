use rand::prelude::*;
use colored::Colorize;
use crate::Sample;

use std::iter::Iterator;

const WIDTH: usize = 9;

/// An iterator that yields training/test sample pairs,
/// one pair per fold.
/// Each fold takes a distinct window of rows as the test sample
/// and leaves the remaining rows as the training sample.
/// # Example
/// ```no_run
/// use minilearn::prelude::*;
/// use minilearn::CrossValidation;
/// use minilearn::research::zero_one_loss;
///
/// let sample = SampleReader::new()
///     .file("/path/to/csv/file.csv")
///     .has_header(true)
///     .target_feature("class")
///     .read()
///     .unwrap();
///
/// let cv = CrossValidation::new(&sample)
///     .n_folds(5)
///     .verbose(true)
///     .seed(777)
///     .shuffle();
///
/// for (train, test) in cv {
///     let tree = DecisionTreeBuilder::new()
///         .criterion(Criterion::Entropy)
///         .significance_level(SignificanceLevel::P05)
///         .build();
///     let f = tree.fit(&train);
///
///     let test_loss = f.predict_all(&test)
///         .into_iter()
///         .zip(test.target())
///         .map(|(hx, &y)| zero_one_loss(y, hx))
///         .sum::<f64>()
///         / test.shape().0 as f64;
///     println!("[test: {test_loss}]");
/// }
/// ```
pub struct CrossValidation<'a> {
    train_size: usize,
    current_fold: usize,
    n_folds: usize,
    seed: u64,
    sample: &'a Sample,
    ix: Vec<usize>,
    verbose: bool,
}


impl<'a> CrossValidation<'a> {
    /// Construct a new instance of `CrossValidation`
    /// over the rows of `sample`, in their stored order.
    #[inline]
    pub fn new(sample: &'a Sample) -> Self {
        let n_sample = sample.shape().0;
        let train_size = (n_sample as f64 * 0.8) as usize;
        let ix = (0..n_sample).collect::<Vec<_>>();
        Self {
            current_fold: 0,
            n_folds: 5,
            seed: 1234,
            verbose: false,
            train_size,
            sample,
            ix,
        }
    }


    /// Set the ratio of training sample.
    /// Default value is `0.8`.
    #[inline]
    pub fn train_ratio(mut self, ratio: f64) -> Self {
        assert!(
            0f64 < ratio && ratio < 1f64,
            "Training ratio should be in `(0, 1)`."
        );
        let n_sample = self.sample.shape().0 as f64;
        self.train_size = (ratio * n_sample) as usize;
        self
    }


    /// Set the number of folds.
    /// Default value is `5.`
    #[inline]
    pub fn n_folds(mut self, n_folds: usize) -> Self {
        self.n_folds = n_folds;
        self
    }


    /// Set the seed of the randomness for shuffling.
    /// Default value is `1234.`
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }


    /// Set the verbose parameter.
    /// If `true`, `CrossValidation` prints the fold number
    /// and the train/test sizes when generating a pair.
    /// Default value is `false.`
    #[inline]
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }


    /// Shuffle the row order with the stored seed.
    /// By default, `CrossValidation` does not shuffle the sample.
    #[inline]
    pub fn shuffle(mut self) -> Self {
        let mut rng = StdRng::seed_from_u64(self.seed);
        self.ix.shuffle(&mut rng);
        self
    }



    /// Returns the training/test sample for `i`th fold.
    #[inline]
    fn fold_at(&self, i: usize) -> (Sample, Sample) {
        let sample_size = self.sample.shape().0;
        let test_size = sample_size - self.train_size;
        let (start, end) = (i*test_size, (i+1)*test_size);
        self.sample.split(&self.ix, start, end)
    }
}


impl<'a> Iterator for CrossValidation<'a> {
    type Item = (Sample, Sample);
    fn next(&mut self) -> Option<Self::Item> {
        if self.current_fold >= self.n_folds { return None; }

        let output = self.fold_at(self.current_fold);
        self.current_fold += 1;

        if self.verbose {
            let train_size = output.0.shape().0;
            let test_size = output.1.shape().0;
            println!(
                "{}    {}    {}",
                format!("  [{: >3}'th fold]", self.current_fold).bold().red(),
                format!("[TRAIN {:>WIDTH$}]", train_size).bold().green(),
                format!("[TEST {:>WIDTH$}]", test_size).bold().yellow(),
            );
        }

        Some(output)
    }
}
