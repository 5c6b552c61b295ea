use std::fmt::Debug;
use std::ops::Index;

// Compressed sparse row format for jagged array.
// Good locality for graph traversal, but works only for static ones.
#[derive(Clone, PartialEq, Eq)]
pub struct CSR<T> {
    data: Vec<T>,
    head: Vec<u32>,
}

impl<T> Debug for CSR<T>
where
    T: Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let v: Vec<&[T]> = (0..self.len()).map(|i| &self[i]).collect();
        v.fmt(f)
    }
}

impl<T, I> FromIterator<I> for CSR<T>
where
    I: IntoIterator<Item = T>,
{
    fn from_iter<J>(iter: J) -> Self
    where
        J: IntoIterator<Item = I>,
    {
        let mut data = vec![];
        let mut head = vec![0];
        for row in iter {
            data.extend(row);
            head.push(data.len() as u32);
        }
        CSR { data, head }
    }
}

impl<T: Copy + Default> CSR<T> {
    /// Buckets `(row, value)` pairs by row with a counting sort.
    /// Within a row, values keep the order in which they were yielded.
    pub fn from_pairs<I>(n: usize, pairs: I) -> Self
    where
        I: IntoIterator<Item = (u32, T)>,
        I::IntoIter: Clone,
    {
        let pairs = pairs.into_iter();

        let mut head = vec![0u32; n + 1];
        for (u, _) in pairs.clone() {
            debug_assert!((u as usize) < n);
            head[u as usize + 1] += 1;
        }
        for i in 0..n {
            head[i + 1] += head[i];
        }

        let mut cursor = head[..n].to_vec();
        let mut data = vec![T::default(); head[n] as usize];
        for (u, v) in pairs {
            let slot = &mut cursor[u as usize];
            data[*slot as usize] = v;
            *slot += 1;
        }

        CSR { data, head }
    }

    /// Total number of stored values over all rows.
    pub fn data_len(&self) -> usize {
        self.data.len()
    }
}

impl<T> CSR<T> {
    /// Number of rows.
    pub fn len(&self) -> usize {
        self.head.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> Index<usize> for CSR<T> {
    type Output = [T];

    fn index(&self, index: usize) -> &Self::Output {
        &self.data[self.head[index] as usize..self.head[index + 1] as usize]
    }
}
