use crate::core::constants::{
    LOWPASS_Q, MAX_CUTOFF_HZ, PANNER_MAX_DISTANCE, PANNER_REF_DISTANCE, PANNER_ROLLOFF,
    PARAM_RAMP_TAU_SEC, REVERB_CROSSFADE_TAU_SEC,
};
use crate::core::{
    generate_impulse_response, white_noise, AudioSettings, DistanceModel, ImpulseResponse,
    KernelCrossfade, ListenerPose, MixGains, PanningModel, RoomShape, SceneSnapshot, SoundType,
};
use crate::error::AudioError;
use glam::Vec3;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// Single entry point for placing things in 3D. Older engines only expose the
/// legacy `setPosition` call, newer ones the `positionX/Y/Z` params.
pub trait ApplyPosition {
    fn apply_position(&self, position: Vec3);
}

#[inline]
fn has_property(target: &JsValue, name: &str) -> bool {
    js_sys::Reflect::has(target, &JsValue::from_str(name)).unwrap_or(false)
}

impl ApplyPosition for web::PannerNode {
    fn apply_position(&self, position: Vec3) {
        if has_property(self.as_ref(), "positionX") {
            self.position_x().set_value(position.x);
            self.position_y().set_value(position.y);
            self.position_z().set_value(position.z);
        } else {
            #[allow(deprecated)]
            self.set_position(position.x as f64, position.y as f64, position.z as f64);
        }
    }
}

/// `AudioListener` exposes its `AudioParam`s only to script, so look them up by name.
fn audio_param(target: &JsValue, name: &str) -> Option<web::AudioParam> {
    js_sys::Reflect::get(target, &JsValue::from_str(name))
        .ok()?
        .dyn_into::<web::AudioParam>()
        .ok()
}

/// Write `value` through the three named params. False when any is missing.
fn set_vec3_params(target: &JsValue, names: [&str; 3], value: Vec3) -> bool {
    let [Some(x), Some(y), Some(z)] = names.map(|n| audio_param(target, n)) else {
        return false;
    };
    x.set_value(value.x);
    y.set_value(value.y);
    z.set_value(value.z);
    true
}

impl ApplyPosition for web::AudioListener {
    fn apply_position(&self, position: Vec3) {
        if !set_vec3_params(self.as_ref(), ["positionX", "positionY", "positionZ"], position) {
            #[allow(deprecated)]
            self.set_position(position.x as f64, position.y as f64, position.z as f64);
        }
    }
}

fn apply_listener_pose(listener: &web::AudioListener, pose: &ListenerPose) {
    listener.apply_position(pose.position);
    let target: &JsValue = listener.as_ref();
    let forward_set = set_vec3_params(target, ["forwardX", "forwardY", "forwardZ"], pose.forward);
    let up_set = set_vec3_params(target, ["upX", "upY", "upZ"], pose.up);
    if !(forward_set && up_set) {
        #[allow(deprecated)]
        listener.set_orientation(
            pose.forward.x as f64,
            pose.forward.y as f64,
            pose.forward.z as f64,
            pose.up.x as f64,
            pose.up.y as f64,
            pose.up.z as f64,
        );
    }
}

fn create_gain(
    audio_ctx: &web::AudioContext,
    value: f32,
    label: &str,
) -> Result<web::GainNode, AudioError> {
    match web::GainNode::new(audio_ctx) {
        Ok(g) => {
            g.gain().set_value(value);
            Ok(g)
        }
        Err(e) => {
            log::error!("{} GainNode error: {:?}", label, e);
            Err(AudioError::node("GainNode", e))
        }
    }
}

#[inline]
fn ramp_to(param: &web::AudioParam, value: f32, now: f64, tau: f64) {
    _ = param.set_target_at_time(value, now, tau);
}

/// Copy a generated impulse response into a stereo `AudioBuffer`.
fn impulse_to_buffer(
    audio_ctx: &web::AudioContext,
    ir: &ImpulseResponse,
) -> Result<web::AudioBuffer, AudioError> {
    let len = ir.len().max(1) as u32;
    let buffer = audio_ctx
        .create_buffer(2, len, ir.sample_rate)
        .map_err(|e| AudioError::node("AudioBuffer", e))?;
    for (ch, samples) in ir.channels.iter().enumerate() {
        if samples.len() == len as usize {
            _ = buffer.copy_to_channel(samples, ch as i32);
        } else {
            // Zero-length kernels still need a one-sample buffer.
            let mut padded = samples.clone();
            padded.resize(len as usize, 0.0);
            _ = buffer.copy_to_channel(&padded, ch as i32);
        }
    }
    Ok(buffer)
}

struct ReverbSlot {
    convolver: web::ConvolverNode,
    gain: web::GainNode,
}

/// Two convolvers behind the wet gain. A new kernel is loaded into the idle
/// slot only after that slot has faded out, then the slots crossfade.
struct ReverbBus {
    slots: [ReverbSlot; 2],
    fade: KernelCrossfade<web::AudioBuffer>,
}

impl ReverbBus {
    fn new(
        audio_ctx: &web::AudioContext,
        input: &web::AudioNode,
        output: &web::AudioNode,
    ) -> Result<Self, AudioError> {
        let make_slot = |level: f32| -> Result<ReverbSlot, AudioError> {
            let convolver = web::ConvolverNode::new(audio_ctx)
                .map_err(|e| AudioError::node("ConvolverNode", e))?;
            convolver.set_normalize(true);
            let gain = create_gain(audio_ctx, level, "Reverb slot")?;
            _ = input.connect_with_audio_node(&convolver);
            _ = convolver.connect_with_audio_node(&gain);
            _ = gain.connect_with_audio_node(output);
            Ok(ReverbSlot { convolver, gain })
        };
        Ok(Self {
            slots: [make_slot(1.0)?, make_slot(0.0)?],
            fade: KernelCrossfade::default(),
        })
    }

    fn install_initial(&mut self, kernel: &web::AudioBuffer) {
        self.slots[self.fade.active()].convolver.set_buffer(Some(kernel));
    }

    fn swap_kernel(&mut self, audio_ctx: &web::AudioContext, kernel: web::AudioBuffer) {
        self.fade.request(kernel);
        self.poll(audio_ctx);
    }

    /// Start a waiting crossfade once the idle slot is silent. Called every frame.
    fn poll(&mut self, audio_ctx: &web::AudioContext) {
        if !self.fade.is_pending() {
            return;
        }
        let idle_gain = self.slots[self.fade.idle()].gain.gain().value();
        let Some(kernel) = self.fade.poll(idle_gain) else {
            return;
        };
        let now = audio_ctx.current_time();
        let (next, prev) = (self.fade.active(), self.fade.idle());
        self.slots[next].convolver.set_buffer(Some(&kernel));
        ramp_to(&self.slots[next].gain.gain(), 1.0, now, REVERB_CROSSFADE_TAU_SEC);
        ramp_to(&self.slots[prev].gain.gain(), 0.0, now, REVERB_CROSSFADE_TAU_SEC);
    }
}

enum ActiveSource {
    Oscillator(web::OscillatorNode),
    Buffer(web::AudioBufferSourceNode),
}

impl ActiveSource {
    fn stop(self) {
        match self {
            ActiveSource::Oscillator(osc) => {
                _ = osc.stop();
                _ = osc.disconnect();
            }
            ActiveSource::Buffer(src) => {
                _ = src.stop();
                _ = src.disconnect();
            }
        }
    }
}

/// Fixed graph:
/// source -> panner -> lowpass -> dry ------------> master -> destination
///                             \-> reverb bus -> wet -/
pub struct AudioEngine {
    audio_ctx: web::AudioContext,
    master: web::GainNode,
    panner: web::PannerNode,
    lowpass: web::BiquadFilterNode,
    dry: web::GainNode,
    wet: web::GainNode,
    reverb: ReverbBus,
    source: Option<ActiveSource>,
    custom_buffer: Option<web::AudioBuffer>,
    last_cutoff: Option<f32>,
    last_mix: Option<MixGains>,
}

impl AudioEngine {
    pub fn new(settings: &AudioSettings, snapshot: &SceneSnapshot) -> Result<Self, AudioError> {
        let audio_ctx = web::AudioContext::new()
            .map_err(|e| AudioError::ContextUnavailable(format!("{:?}", e)))?;

        let master = create_gain(&audio_ctx, settings.volume, "Master")?;

        let panner =
            web::PannerNode::new(&audio_ctx).map_err(|e| AudioError::node("PannerNode", e))?;
        configure_panner(&panner, settings.panning, settings.distance);

        let lowpass = web::BiquadFilterNode::new(&audio_ctx)
            .map_err(|e| AudioError::node("BiquadFilterNode", e))?;
        lowpass.set_type(web::BiquadFilterType::Lowpass);
        lowpass.frequency().set_value(MAX_CUTOFF_HZ);
        lowpass.q().set_value(LOWPASS_Q);

        let dry = create_gain(&audio_ctx, snapshot.mix.dry, "Dry")?;
        let wet = create_gain(&audio_ctx, snapshot.mix.wet, "Reverb wet")?;

        _ = panner.connect_with_audio_node(&lowpass);
        _ = lowpass.connect_with_audio_node(&dry);
        _ = dry.connect_with_audio_node(&master);
        let mut reverb = ReverbBus::new(&audio_ctx, &lowpass, &wet)?;
        _ = wet.connect_with_audio_node(&master);
        _ = master.connect_with_audio_node(&audio_ctx.destination());

        let shape = settings.reverb_shape();
        let kernel = impulse_to_buffer(
            &audio_ctx,
            &generate_impulse_response(shape, audio_ctx.sample_rate(), &mut rand::thread_rng()),
        )?;
        reverb.install_initial(&kernel);

        apply_listener_pose(&audio_ctx.listener(), &snapshot.listener);

        let mut engine = Self {
            audio_ctx,
            master,
            panner,
            lowpass,
            dry,
            wet,
            reverb,
            source: None,
            custom_buffer: None,
            last_cutoff: None,
            last_mix: Some(snapshot.mix),
        };
        engine.apply_snapshot(snapshot);
        log::info!(
            "[audio] graph ready sr={} room={} decay={:.1}s",
            engine.audio_ctx.sample_rate(),
            settings.room.map_or("initial", |r| r.name()),
            shape.decay_sec
        );
        Ok(engine)
    }

    pub fn context(&self) -> web::AudioContext {
        self.audio_ctx.clone()
    }

    pub fn resume(&self) {
        _ = self.audio_ctx.resume();
    }

    /// Push one frame of scene state into the graph. Filter and mix only
    /// re-target when their values moved, the panner follows every frame.
    pub fn apply_snapshot(&mut self, snapshot: &SceneSnapshot) {
        self.panner.apply_position(snapshot.cartesian);
        self.reverb.poll(&self.audio_ctx);
        let now = self.audio_ctx.current_time();

        if self.last_cutoff != Some(snapshot.cutoff_hz) {
            ramp_to(
                &self.lowpass.frequency(),
                snapshot.cutoff_hz,
                now,
                PARAM_RAMP_TAU_SEC,
            );
            self.last_cutoff = Some(snapshot.cutoff_hz);
        }

        if self.last_mix != Some(snapshot.mix) {
            ramp_to(&self.dry.gain(), snapshot.mix.dry, now, PARAM_RAMP_TAU_SEC);
            ramp_to(&self.wet.gain(), snapshot.mix.wet, now, PARAM_RAMP_TAU_SEC);
            self.last_mix = Some(snapshot.mix);
        }
    }

    pub fn set_volume(&self, volume: f32) {
        self.master.gain().set_value(volume.clamp(0.0, 1.0));
    }

    pub fn set_frequency(&self, frequency_hz: f32) {
        if let Some(ActiveSource::Oscillator(osc)) = &self.source {
            osc.frequency().set_value(frequency_hz);
        }
    }

    pub fn set_panning_model(&self, model: PanningModel) {
        self.panner.set_panning_model(panning_model_type(model));
    }

    pub fn set_distance_model(&self, model: DistanceModel) {
        self.panner.set_distance_model(distance_model_type(model));
    }

    /// Regenerate the reverb kernel for a room and crossfade onto it.
    pub fn set_room(&mut self, shape: RoomShape) -> Result<(), AudioError> {
        let ir = generate_impulse_response(
            shape,
            self.audio_ctx.sample_rate(),
            &mut rand::thread_rng(),
        );
        let kernel = impulse_to_buffer(&self.audio_ctx, &ir)?;
        self.reverb.swap_kernel(&self.audio_ctx, kernel);
        log::info!(
            "[audio] reverb kernel decay={:.1}s size={:.1} samples={}",
            shape.decay_sec,
            shape.room_size,
            ir.len()
        );
        Ok(())
    }

    pub fn set_custom_sample(&mut self, buffer: web::AudioBuffer) {
        self.custom_buffer = Some(buffer);
    }

    /// Replace whatever is playing with a fresh source of `settings.sound`.
    /// Returns false when nothing could be started.
    pub fn start_source(&mut self, settings: &AudioSettings) -> bool {
        self.stop_source();
        let started = match settings.sound {
            SoundType::Sine | SoundType::Square => self
                .start_oscillator(settings.sound, settings.frequency_hz)
                .map(ActiveSource::Oscillator),
            SoundType::Noise => self.start_noise().map(ActiveSource::Buffer),
            SoundType::Custom => match self.custom_buffer.clone() {
                Some(buffer) => self.start_buffer(&buffer).map(ActiveSource::Buffer),
                None => {
                    log::warn!("[audio] custom source selected but no sample is loaded");
                    None
                }
            },
        };
        self.source = started;
        self.source.is_some()
    }

    pub fn stop_source(&mut self) {
        if let Some(src) = self.source.take() {
            src.stop();
        }
    }

    fn start_oscillator(
        &self,
        sound: SoundType,
        frequency_hz: f32,
    ) -> Option<web::OscillatorNode> {
        let osc = match web::OscillatorNode::new(&self.audio_ctx) {
            Ok(o) => o,
            Err(e) => {
                log::error!("OscillatorNode error: {:?}", e);
                return None;
            }
        };
        match sound {
            SoundType::Square => osc.set_type(web::OscillatorType::Square),
            _ => osc.set_type(web::OscillatorType::Sine),
        }
        osc.frequency().set_value(frequency_hz);
        _ = osc.connect_with_audio_node(&self.panner);
        _ = osc.start();
        Some(osc)
    }

    fn start_noise(&self) -> Option<web::AudioBufferSourceNode> {
        let sr = self.audio_ctx.sample_rate();
        let noise = white_noise(sr, &mut rand::thread_rng());
        let buffer = match self.audio_ctx.create_buffer(1, noise.len().max(1) as u32, sr) {
            Ok(b) => b,
            Err(e) => {
                log::error!("noise AudioBuffer error: {:?}", e);
                return None;
            }
        };
        _ = buffer.copy_to_channel(&noise, 0);
        self.start_buffer(&buffer)
    }

    fn start_buffer(&self, buffer: &web::AudioBuffer) -> Option<web::AudioBufferSourceNode> {
        let src = match web::AudioBufferSourceNode::new(&self.audio_ctx) {
            Ok(s) => s,
            Err(e) => {
                log::error!("AudioBufferSourceNode error: {:?}", e);
                return None;
            }
        };
        src.set_buffer(Some(buffer));
        src.set_loop(true);
        _ = src.connect_with_audio_node(&self.panner);
        _ = src.start();
        Some(src)
    }
}

fn panning_model_type(model: PanningModel) -> web::PanningModelType {
    match model {
        PanningModel::Hrtf => web::PanningModelType::Hrtf,
        PanningModel::EqualPower => web::PanningModelType::Equalpower,
    }
}

fn distance_model_type(model: DistanceModel) -> web::DistanceModelType {
    match model {
        DistanceModel::Linear => web::DistanceModelType::Linear,
        DistanceModel::Inverse => web::DistanceModelType::Inverse,
        DistanceModel::Exponential => web::DistanceModelType::Exponential,
    }
}

fn configure_panner(panner: &web::PannerNode, panning: PanningModel, distance: DistanceModel) {
    panner.set_panning_model(panning_model_type(panning));
    panner.set_distance_model(distance_model_type(distance));
    panner.set_ref_distance(PANNER_REF_DISTANCE);
    panner.set_max_distance(PANNER_MAX_DISTANCE);
    panner.set_rolloff_factor(PANNER_ROLLOFF);
    panner.set_cone_inner_angle(360.0);
    panner.set_cone_outer_angle(360.0);
    panner.set_cone_outer_gain(0.0);
}

/// Read and decode a user-picked file. Runs off the frame loop; the caller
/// installs the buffer once it resolves.
pub async fn decode_sample(
    audio_ctx: &web::AudioContext,
    file: &web::File,
) -> Result<web::AudioBuffer, AudioError> {
    let name = file.name();
    let bytes = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| AudioError::decode(&name, e))?;
    let array: js_sys::ArrayBuffer = bytes
        .dyn_into()
        .map_err(|e| AudioError::decode(&name, e))?;
    let promise = audio_ctx
        .decode_audio_data(&array)
        .map_err(|e| AudioError::decode(&name, e))?;
    let decoded = JsFuture::from(promise)
        .await
        .map_err(|e| AudioError::decode(&name, e))?;
    decoded
        .dyn_into::<web::AudioBuffer>()
        .map_err(|e| AudioError::decode(&name, e))
}
