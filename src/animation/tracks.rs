use glam::{Quat, Vec3};

/// Value types a keyframe track can interpolate between.
pub trait Interpolatable: Copy {
    fn interpolate(start: Self, end: Self, t: f32) -> Self;
}

impl Interpolatable for f32 {
    fn interpolate(start: Self, end: Self, t: f32) -> Self {
        start + (end - start) * t
    }
}

impl Interpolatable for Vec3 {
    fn interpolate(start: Self, end: Self, t: f32) -> Self {
        start.lerp(end, t)
    }
}

impl Interpolatable for Quat {
    fn interpolate(start: Self, end: Self, t: f32) -> Self {
        start.slerp(end, t)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterpolationMode {
    Linear,
    Step,
}

/// How far the cursor scans linearly before falling back to binary search.
const MAX_SCAN_OFFSET: usize = 3;

/// Sampling hint: remembers the keyframe interval of the previous sample so
/// that steady forward playback costs O(1) per frame.
#[derive(Debug, Clone, Default)]
pub struct KeyframeCursor {
    pub last_index: usize,
}

/// A sorted sequence of keyframes over one value type.
///
/// Sampling clamps outside the keyframe range: before the first key the
/// first value is returned, after the last key the last value.
#[derive(Debug, Clone)]
pub struct KeyframeTrack<T: Interpolatable> {
    pub times: Vec<f32>,
    pub values: Vec<T>,
    pub interpolation: InterpolationMode,
}

impl<T: Interpolatable> KeyframeTrack<T> {
    /// `times` must be sorted ascending and match `values` in length.
    #[must_use]
    pub fn new(times: Vec<f32>, values: Vec<T>, interpolation: InterpolationMode) -> Self {
        debug_assert_eq!(times.len(), values.len());
        Self {
            times,
            values,
            interpolation,
        }
    }

    /// End time of the track (time of the last keyframe).
    #[must_use]
    pub fn end_time(&self) -> f32 {
        self.times.last().copied().unwrap_or(0.0)
    }

    /// Samples without a cursor: always a binary search.
    ///
    /// # Panics
    /// Panics if the track is empty.
    #[must_use]
    pub fn sample(&self, time: f32) -> T {
        assert!(!self.times.is_empty(), "track has no keyframes");

        // partition_point finds the first index where t > time
        let next_idx = self.times.partition_point(|&t| t <= time);
        self.sample_at_frame(next_idx.saturating_sub(1), time)
    }

    /// Samples with a cursor hint.
    ///
    /// If `time` lies within [`MAX_SCAN_OFFSET`] intervals of the cursor's
    /// remembered position, the interval is found by a linear scan; large
    /// jumps (scrubbing, loop wrap) fall back to binary search. The cursor
    /// is updated either way.
    ///
    /// # Panics
    /// Panics if the track is empty.
    pub fn sample_with_cursor(&self, time: f32, cursor: &mut KeyframeCursor) -> T {
        let len = self.times.len();
        assert!(len > 0, "track has no keyframes");

        if len == 1 {
            return self.values[0];
        }

        // Cursor may point past the end if the clip was swapped out
        let i = cursor.last_index.min(len - 1);
        let t_curr = self.times[i];

        let found_index = if time >= t_curr {
            // Forward scan: playback advancing at normal speed
            let mut res = None;
            for offset in 0..=MAX_SCAN_OFFSET {
                let idx = i + offset;
                if idx >= len - 1 {
                    if time >= self.times[len - 1] {
                        res = Some(len - 1);
                    }
                    break;
                }
                if time < self.times[idx + 1] {
                    res = Some(idx);
                    break;
                }
            }
            res
        } else {
            // Backward scan: reverse playback or a small rewind
            let mut res = None;
            for offset in 0..=MAX_SCAN_OFFSET {
                let Some(idx) = i.checked_sub(offset) else {
                    break;
                };
                if time >= self.times[idx] {
                    res = Some(idx);
                    break;
                }
            }
            res
        };

        let final_index = match found_index {
            Some(idx) => idx,
            None => {
                // Large jump: O(log N) fallback
                let next_idx = self.times.partition_point(|&t| t <= time);
                next_idx.saturating_sub(1)
            }
        };

        cursor.last_index = final_index;
        self.sample_at_frame(final_index, time)
    }

    fn sample_at_frame(&self, index: usize, time: f32) -> T {
        let len = self.times.len();

        // No interval to the right: clamp to the last value
        if index >= len - 1 {
            return self.values[len - 1];
        }

        match self.interpolation {
            InterpolationMode::Step => self.values[index],
            InterpolationMode::Linear => {
                let t0 = self.times[index];
                let t1 = self.times[index + 1];
                let dt = t1 - t0;

                let t = if dt > 1e-6 { (time - t0) / dt } else { 0.0 };
                let t = t.clamp(0.0, 1.0);

                T::interpolate(self.values[index], self.values[index + 1], t)
            }
        }
    }
}
