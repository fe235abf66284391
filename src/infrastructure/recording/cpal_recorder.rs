//! Cross-platform audio recorder using cpal
//!
//! Captures mono 16-bit PCM at the requested sample rate, resampling from
//! the device rate when the hardware cannot open at the target directly.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex as StdMutex};
use std::time::Instant;

use async_trait::async_trait;
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{SampleFormat, SampleRate, StreamConfig};
use rubato::{FftFixedIn, Resampler};
use tokio::time::{interval, Duration as TokioDuration};

use crate::application::ports::{AudioRecorder, ProgressCallback, RecordingError};
use crate::domain::recording::{Duration, PcmAudio, RecordingFormat};

/// Audio recorder using cpal.
///
/// The stream is managed inside a blocking task to avoid Send/Sync issues
/// with cpal::Stream which is not thread-safe.
pub struct CpalRecorder {
    /// Recorded audio samples (mono, i16, at device sample rate)
    audio_buffer: Arc<StdMutex<Vec<i16>>>,
    /// Recording state
    is_recording: Arc<AtomicBool>,
}

impl CpalRecorder {
    /// Create a new cpal-based recorder
    pub fn new() -> Self {
        Self {
            audio_buffer: Arc::new(StdMutex::new(Vec::new())),
            is_recording: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Get the default input device
    fn get_input_device() -> Result<cpal::Device, RecordingError> {
        let host = cpal::default_host();
        host.default_input_device()
            .ok_or(RecordingError::NoAudioDevice)
    }

    /// Get a suitable input configuration for the target sample rate
    fn get_input_config(
        device: &cpal::Device,
        target_rate: u32,
    ) -> Result<(StreamConfig, SampleFormat), RecordingError> {
        let supported_configs = device.supported_input_configs().map_err(|e| {
            RecordingError::UnsupportedFormat(format!("Failed to get configs: {}", e))
        })?;

        // Prefer mono, and prefer ranges that include the target rate
        let mut best_config: Option<cpal::SupportedStreamConfigRange> = None;

        for config in supported_configs {
            if config.sample_format() != SampleFormat::I16
                && config.sample_format() != SampleFormat::F32
            {
                continue;
            }

            let includes_target = config.min_sample_rate().0 <= target_rate
                && config.max_sample_rate().0 >= target_rate;

            let is_better = match &best_config {
                None => true,
                Some(current) => {
                    let fewer_channels = config.channels() < current.channels();
                    let better_rate =
                        includes_target && current.min_sample_rate().0 > target_rate;
                    fewer_channels || better_rate
                }
            };
            if is_better {
                best_config = Some(config);
            }
        }

        let config_range = best_config.ok_or_else(|| {
            RecordingError::UnsupportedFormat("No suitable input config found".into())
        })?;

        // Use the target rate if supported, otherwise the device minimum
        let sample_rate = if config_range.min_sample_rate().0 <= target_rate
            && config_range.max_sample_rate().0 >= target_rate
        {
            SampleRate(target_rate)
        } else {
            config_range.min_sample_rate()
        };

        let sample_format = config_range.sample_format();
        let config = StreamConfig {
            channels: config_range.channels(),
            sample_rate,
            buffer_size: cpal::BufferSize::Default,
        };

        Ok((config, sample_format))
    }

    /// Resample audio from the device rate to the target rate if needed
    fn resample(
        samples: &[i16],
        source_rate: u32,
        target_rate: u32,
    ) -> Result<Vec<i16>, RecordingError> {
        if source_rate == target_rate {
            return Ok(samples.to_vec());
        }

        let samples_f32: Vec<f32> = samples.iter().map(|&s| s as f32 / 32768.0).collect();

        let ratio = target_rate as f64 / source_rate as f64;
        let output_len = (samples_f32.len() as f64 * ratio).ceil() as usize;

        let mut resampler = FftFixedIn::<f32>::new(
            source_rate as usize,
            target_rate as usize,
            1024, // Chunk size
            2,    // Sub-chunks
            1,    // Mono
        )
        .map_err(|e| RecordingError::CaptureFailed(format!("Resampler init failed: {}", e)))?;

        // The FFT filter delays its output by a fixed number of frames;
        // skip that lead-in and flush the same amount past the end so the
        // capture is neither shifted nor clipped
        let delay = resampler.output_delay();

        let mut output = Vec::with_capacity(output_len + delay);
        let mut input_pos = 0;

        while input_pos < samples_f32.len() {
            let frames_needed = resampler.input_frames_next();
            let end_pos = (input_pos + frames_needed).min(samples_f32.len());
            let chunk: Vec<Vec<f32>> = vec![samples_f32[input_pos..end_pos].to_vec()];

            // The final chunk may be short; process_partial pads it internally
            let resampled = if end_pos - input_pos < frames_needed {
                resampler.process_partial(Some(chunk.as_slice()), None)
            } else {
                resampler.process(&chunk, None)
            }
            .map_err(|e| RecordingError::CaptureFailed(format!("Resampling failed: {}", e)))?;

            output.extend(resampled[0].iter().map(|&s| (s * 32767.0) as i16));
            input_pos = end_pos;
        }

        while output.len() < output_len + delay {
            let tail = resampler
                .process_partial::<Vec<f32>>(None, None)
                .map_err(|e| RecordingError::CaptureFailed(format!("Resampling failed: {}", e)))?;
            if tail[0].is_empty() {
                break;
            }
            output.extend(tail[0].iter().map(|&s| (s * 32767.0) as i16));
        }

        Ok(output.into_iter().skip(delay).take(output_len).collect())
    }

    /// Mix stereo to mono
    fn stereo_to_mono(samples: &[i16], channels: u16) -> Vec<i16> {
        if channels == 1 {
            return samples.to_vec();
        }

        samples
            .chunks(channels as usize)
            .map(|chunk| {
                let sum: i32 = chunk.iter().map(|&s| s as i32).sum();
                (sum / channels as i32) as i16
            })
            .collect()
    }
}

impl Default for CpalRecorder {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AudioRecorder for CpalRecorder {
    async fn record(
        &self,
        format: RecordingFormat,
        duration: Duration,
        on_progress: Option<ProgressCallback>,
    ) -> Result<PcmAudio, RecordingError> {
        let duration_ms = duration.as_millis();
        let target_rate = format.sample_rate;

        {
            let mut buffer = self.audio_buffer.lock().unwrap();
            buffer.clear();
        }

        self.is_recording.store(true, Ordering::SeqCst);

        let audio_buffer = Arc::clone(&self.audio_buffer);
        let is_recording = Arc::clone(&self.is_recording);

        // cpal::Stream is not Send, so the whole capture runs on one
        // blocking task that the caller awaits
        let record_handle = tokio::task::spawn_blocking(move || {
            let device = CpalRecorder::get_input_device()?;
            let (config, sample_format) = CpalRecorder::get_input_config(&device, target_rate)?;
            let sample_rate = config.sample_rate.0;
            let channels = config.channels;

            let audio_buffer_clone = Arc::clone(&audio_buffer);
            let is_recording_clone = Arc::clone(&is_recording);

            let stream = match sample_format {
                SampleFormat::I16 => device
                    .build_input_stream(
                        &config,
                        move |data: &[i16], _: &cpal::InputCallbackInfo| {
                            if is_recording_clone.load(Ordering::SeqCst) {
                                let mono = CpalRecorder::stereo_to_mono(data, channels);
                                if let Ok(mut buffer) = audio_buffer_clone.lock() {
                                    buffer.extend_from_slice(&mono);
                                }
                            }
                        },
                        |err| eprintln!("Audio stream error: {}", err),
                        None,
                    )
                    .map_err(|e| RecordingError::StartFailed(e.to_string()))?,

                SampleFormat::F32 => {
                    let audio_buffer_clone = Arc::clone(&audio_buffer);
                    let is_recording_clone = Arc::clone(&is_recording);

                    device
                        .build_input_stream(
                            &config,
                            move |data: &[f32], _: &cpal::InputCallbackInfo| {
                                if is_recording_clone.load(Ordering::SeqCst) {
                                    let i16_data: Vec<i16> =
                                        data.iter().map(|&s| (s * 32767.0) as i16).collect();
                                    let mono = CpalRecorder::stereo_to_mono(&i16_data, channels);
                                    if let Ok(mut buffer) = audio_buffer_clone.lock() {
                                        buffer.extend_from_slice(&mono);
                                    }
                                }
                            },
                            |err| eprintln!("Audio stream error: {}", err),
                            None,
                        )
                        .map_err(|e| RecordingError::StartFailed(e.to_string()))?
                }

                _ => {
                    return Err(RecordingError::UnsupportedFormat(
                        "Unsupported sample format".into(),
                    ))
                }
            };

            stream
                .play()
                .map_err(|e| RecordingError::StartFailed(e.to_string()))?;

            // Fixed wall-clock capture window
            std::thread::sleep(std::time::Duration::from_millis(duration_ms));

            is_recording.store(false, Ordering::SeqCst);
            drop(stream);

            Ok::<u32, RecordingError>(sample_rate)
        });

        if let Some(progress) = on_progress {
            let start = Instant::now();
            let progress_clone = Arc::clone(&progress);
            let is_recording = Arc::clone(&self.is_recording);

            tokio::spawn(async move {
                let mut ticker = interval(TokioDuration::from_millis(100));
                while is_recording.load(Ordering::SeqCst) {
                    ticker.tick().await;
                    let elapsed = start.elapsed().as_millis() as u64;
                    if elapsed >= duration_ms {
                        progress_clone(duration_ms, duration_ms);
                        break;
                    }
                    progress_clone(elapsed, duration_ms);
                }
            });
        }

        let joined = record_handle
            .await
            .map_err(|e| RecordingError::CaptureFailed(format!("Task join error: {}", e)))?;

        // The blocking task may have bailed before clearing the flag
        self.is_recording.store(false, Ordering::SeqCst);
        let device_rate = joined?;

        let samples = {
            let buffer = self.audio_buffer.lock().unwrap();
            buffer.clone()
        };

        if samples.is_empty() {
            return Err(RecordingError::CaptureFailed(
                "No audio data captured".to_string(),
            ));
        }

        // Resampling is CPU-bound; keep it off the async workers
        let resampled = tokio::task::spawn_blocking(move || {
            Self::resample(&samples, device_rate, target_rate)
        })
        .await
        .map_err(|e| RecordingError::CaptureFailed(format!("Resample task error: {}", e)))??;

        Ok(PcmAudio::new(resampled, target_rate))
    }
}
