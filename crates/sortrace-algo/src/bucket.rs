//! Bucket sort over `floor(sqrt(n))` buckets.
//!
//! Elements are routed by the linear projection
//! `floor((x - min) / (max - min) * (buckets - 1))` (`bucket` frames), each
//! bucket is insertion sorted (`sort` frames), and the buckets are written
//! back in index order (`merge` frames).
//!
//! When every element is equal the projection is undefined; everything goes
//! to bucket 0 instead.

use sortrace_core::{Phase, Recorder, Sortable};

pub(crate) fn sort<T: Sortable>(arr: &mut [T], rec: &mut Recorder<T>) {
    let n = arr.len();
    let bucket_count = integer_sqrt(n).max(1);

    let (min, max) = arr.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        let x = v.to_f64();
        (lo.min(x), hi.max(x))
    });
    let span = max - min;

    let mut buckets: Vec<Vec<T>> = vec![Vec::new(); bucket_count];
    for i in 0..n {
        let b = bucket_index(arr[i].to_f64(), min, span, bucket_count);
        buckets[b].push(arr[i]);
        rec.emit_with_slot(arr, &[i], Phase::Bucket, b);
    }

    // Sort frames point at where each bucket element will land.
    let mut offset = 0;
    for (b, bucket) in buckets.iter_mut().enumerate() {
        insertion_sort(bucket);
        tracing::trace!(bucket = b, len = bucket.len(), "bucket sorted");
        for k in 0..bucket.len() {
            rec.emit_with_slot(arr, &[offset + k], Phase::Sort, b);
        }
        offset += bucket.len();
    }

    let mut pos = 0;
    for (b, bucket) in buckets.iter().enumerate() {
        for &value in bucket {
            arr[pos] = value;
            rec.emit_with_slot(arr, &[pos], Phase::Merge, b);
            pos += 1;
        }
    }
}

fn bucket_index(x: f64, min: f64, span: f64, bucket_count: usize) -> usize {
    if bucket_count == 1 || !(span.is_finite() && span > 0.0) {
        return 0;
    }
    let scaled = ((x - min) / span * (bucket_count - 1) as f64).floor();
    (scaled as usize).min(bucket_count - 1)
}

fn integer_sqrt(n: usize) -> usize {
    let mut root = (n as f64).sqrt() as usize;
    while root > 0 && root.saturating_mul(root) > n {
        root -= 1;
    }
    while (root + 1).saturating_mul(root + 1) <= n {
        root += 1;
    }
    root
}

/// Stable in-place insertion sort; a key only moves past strictly greater
/// elements.
fn insertion_sort<T: Sortable>(items: &mut [T]) {
    for i in 1..items.len() {
        let key = items[i];
        let mut gap = i;
        while gap > 0 && key < items[gap - 1] {
            items[gap] = items[gap - 1];
            gap -= 1;
        }
        items[gap] = key;
    }
}
