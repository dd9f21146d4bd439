use std::path::Path;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::collections::HashMap;
use std::ops::Index;

use polars::prelude::*;
use rayon::prelude::*;
use super::feature_struct::*;


/// Struct `Sample` holds a batch sample in a dense, column-major format.
#[derive(Debug)]
pub struct Sample {
    pub(super) name_to_index: HashMap<String, usize>,
    pub(super) features: Vec<Feature>,
    pub(super) target: Vec<f64>,
    pub(super) n_sample: usize,
    pub(super) n_feature: usize,
}


impl Sample {
    /// Convert `polars::DataFrame` and `polars::Series` into `Sample`.
    /// This method takes the ownership for the given pair
    /// `data` and `target`.
    pub fn from_dataframe(data: DataFrame, target: Series)
        -> io::Result<Self>
    {
        let (n_sample, n_feature) = data.shape();
        let target = target.f64()
            .expect("The target is not a dtype f64")
            .into_iter()
            .collect::<Option<Vec<_>>>()
            .unwrap();

        let features = data.get_columns()
            .into_par_iter()
            .map(Feature::from_series)
            .collect::<Vec<_>>();

        let name_to_index = features.iter()
            .enumerate()
            .map(|(i, f)| (f.name().to_string(), i))
            .collect::<HashMap<_, _>>();

        let sample = Self {
            name_to_index, features, target, n_sample, n_feature,
        };
        Ok(sample)
    }


    /// Read a CSV format file to `Sample` type.
    pub fn from_csv<P>(file: P, mut has_header: bool) -> io::Result<Self>
        where P: AsRef<Path>,
    {
        // Open the given `file`.
        let file = File::open(file)?;
        let mut lines = BufReader::new(file).lines();

        let mut features = Vec::new();
        if has_header {
            let line = lines.next().unwrap();
            features = line?.split(',')
                .map(Feature::new)
                .collect::<Vec<_>>();
        }
        let mut n_sample = 0_usize;

        // For each line of the file
        for line in lines {
            let line = line?;

            // If the header does not exist,
            // construct a dummy header.
            if !has_header {
                let xs = line.split(',')
                    .map(|x| x.trim().parse::<f64>().unwrap())
                    .collect::<Vec<_>>();

                let n_feature = xs.len();
                features = (1..=n_feature).map(|i| {
                        let name = format!("Feat. [{i}]");
                        Feature::new(name)
                    })
                    .collect::<Vec<_>>();

                for (feat, x) in features.iter_mut().zip(xs) {
                    feat.append(x);
                }

                has_header = true;
                n_sample += 1;
                continue;
            }

            line.split(',')
                .map(|x| x.trim().parse::<f64>().unwrap())
                .enumerate()
                .for_each(|(i, x)| {
                    features[i].append(x);
                });

            n_sample += 1;
        }

        let n_feature = features.len();
        let target = Vec::with_capacity(0);

        let name_to_index = features.iter()
            .enumerate()
            .map(|(i, f)| (f.name().to_string(), i))
            .collect::<HashMap<_, _>>();

        let sample = Self {
            name_to_index, features, target, n_sample, n_feature,
        };

        Ok(sample)
    }


    /// Returns a slice of the target values.
    pub fn target(&self) -> &[f64] {
        &self.target[..]
    }


    /// Returns a slice of type `Feature`.
    pub fn features(&self) -> &[Feature] {
        &self.features[..]
    }


    /// Set the feature of name `target` to `self.target`.
    /// The old value assigned to `self.target` will be dropped.
    pub fn set_target<S: AsRef<str>>(mut self, target: S) -> Self {
        let target = target.as_ref();
        let pos = self.features.iter()
            .position(|feat| feat.name() == target)
            .expect("The target class does not exist");


        self.target = self.features.remove(pos).into_target();
        self.n_feature -= 1;


        self.name_to_index = self.features.iter()
            .enumerate()
            .map(|(i, f)| (f.name().to_string(), i))
            .collect::<HashMap<_, _>>();

        self
    }


    /// Returns the pair of the number of examples and
    /// the number of features
    pub fn shape(&self) -> (usize, usize) {
        (self.n_sample, self.n_feature)
    }


    /// Returns the `idx`-th instance `(x, y)`.
    pub fn at(&self, idx: usize) -> (Vec<f64>, f64) {
        let x = self.features.iter()
            .map(|feat| feat[idx])
            .collect::<Vec<f64>>();
        let y = self.target[idx];

        (x, y)
    }


    /// Split `self` into a training/test sample pair.
    /// The test sample consists of the rows `ix[start..end]`
    /// and the training sample of the remaining rows of `ix`,
    /// so that one can realize a cross-validation split
    /// by feeding a (shuffled) index order `ix`.
    pub fn split<T>(&self, ix: T, start: usize, end: usize)
        -> (Sample, Sample)
        where T: AsRef<[usize]>
    {
        let ix = ix.as_ref();

        let train_rows = ix[..start].iter()
            .chain(ix[end..].iter())
            .copied()
            .collect::<Vec<_>>();
        let test_rows = ix[start..end].to_vec();

        (self.subsample(&train_rows), self.subsample(&test_rows))
    }


    /// Build a new `Sample` from the given rows of `self`.
    fn subsample(&self, rows: &[usize]) -> Self {
        let features = self.features.iter()
            .map(|feat| {
                let mut sub = Feature::new(feat.name());
                for &i in rows {
                    sub.append(feat[i]);
                }
                sub
            })
            .collect::<Vec<_>>();

        // An unspecified target stays unspecified.
        let target = if self.target.len() == self.n_sample {
            rows.iter().map(|&i| self.target[i]).collect::<Vec<_>>()
        } else {
            Vec::with_capacity(0)
        };

        Self {
            name_to_index: self.name_to_index.clone(),
            features,
            target,
            n_sample: rows.len(),
            n_feature: self.n_feature,
        }
    }
}


impl<S> Index<S> for Sample
    where S: AsRef<str>
{
    type Output = Feature;


    fn index(&self, name: S) -> &Self::Output {
        let name: &str = name.as_ref();
        let k = *self.name_to_index.get(name).unwrap();
        &self.features[k]
    }
}
