//! Audio system implementation backed by a dedicated thread and Raylib.
//!
//! This module hosts the background audio thread and the systems that bridge
//! it with the ECS world:
//! - [`audio_thread`] runs on its own OS thread, owns the Raylib audio
//!   device, and processes [`AudioCmd`] messages, emitting [`AudioMessage`]
//!   responses.
//! - [`forward_audio_cmds`] pushes ECS-written commands through the bridge
//!   channel; [`poll_audio_messages`] drains the thread's replies back into
//!   the ECS message queue each frame.
//!
//! The design keeps Raylib audio API calls isolated to a single thread while
//! the main game thread communicates over lock-free channels. The thread is
//! created once via [`crate::resources::audio::setup_audio`] and joined via
//! [`crate::resources::audio::shutdown_audio`]; music streaming requires
//! periodic `update_stream()` calls, which the thread loop takes care of
//! while tracks are playing.

use crate::events::audio::{AudioCmd, AudioMessage};
use crate::resources::audio::AudioBridge;
use bevy_ecs::prelude::Messages;
use bevy_ecs::prelude::{MessageReader, MessageWriter, Res, ResMut};
use crossbeam_channel::{Receiver, Sender};
use log::{debug, info, warn};
use raylib::core::audio::{Music, RaylibAudio, Sound};
use rustc_hash::{FxHashMap, FxHashSet};

/// Drain any pending messages from the audio thread into the ECS
/// [`Messages<AudioMessage>`] mailbox. Non-blocking, runs each frame.
pub fn poll_audio_messages(bridge: Res<AudioBridge>, mut writer: MessageWriter<AudioMessage>) {
    writer.write_batch(bridge.rx_msg.try_iter());
}

/// Advance the ECS message queue for [`AudioMessage`].
pub fn update_bevy_audio_messages(mut messages: ResMut<Messages<AudioMessage>>) {
    messages.update();
}

/// Forward ECS AudioCmd messages to the audio thread via the bridge sender.
pub fn forward_audio_cmds(bridge: Res<AudioBridge>, mut reader: MessageReader<AudioCmd>) {
    for cmd in reader.read() {
        // Ignore send errors during shutdown.
        let _ = bridge.tx_cmd.send(cmd.clone());
    }
}

/// Advance the ECS message queue for AudioCmd so same-frame readers can observe writes.
pub fn update_bevy_audio_cmds(mut messages: ResMut<Messages<AudioCmd>>) {
    messages.update();
}

/// Log load failures reported by the audio thread.
pub fn log_audio_messages(mut reader: MessageReader<AudioMessage>) {
    for message in reader.read() {
        match message {
            AudioMessage::MusicLoadFailed { id, error } => {
                warn!("music '{}' failed to load: {}", id, error)
            }
            AudioMessage::FxLoadFailed { id, error } => {
                warn!("fx '{}' failed to load: {}", id, error)
            }
            AudioMessage::MusicFinished { id } => debug!("music '{}' finished", id),
            _ => {}
        }
    }
}

/// Entry point of the dedicated audio thread.
///
/// Owns every `Music` and `Sound` handle for the life of the process,
/// reacts to [`AudioCmd`] inputs, pumps the playing music streams, restarts
/// looped tracks that ran out, and reports state changes as
/// [`AudioMessage`]s. Blocks until [`AudioCmd::Shutdown`] arrives, then
/// drops all handles and exits.
pub fn audio_thread(rx_cmd: Receiver<AudioCmd>, tx_msg: Sender<AudioMessage>) {
    let audio = match RaylibAudio::init_audio_device() {
        Ok(device) => device,
        Err(e) => {
            panic!("Failed to initialize audio device: {}", e);
        }
    };

    info!(
        "audio thread starting (id={:?})",
        std::thread::current().id()
    );

    let mut musics: FxHashMap<String, Music> = FxHashMap::default();
    let mut playing: FxHashSet<String> = FxHashSet::default();
    let mut looped: FxHashSet<String> = FxHashSet::default();
    let mut sounds: FxHashMap<String, Sound> = FxHashMap::default();

    'run: loop {
        // 1) Drain commands
        for cmd in rx_cmd.try_iter() {
            match cmd {
                AudioCmd::LoadMusic { id, path } => match audio.new_music(&path) {
                    Ok(music) => {
                        debug!("loaded music id='{}' path='{}'", id, path);
                        musics.insert(id.clone(), music);
                        let _ = tx_msg.send(AudioMessage::MusicLoaded { id });
                    }
                    Err(e) => {
                        let _ = tx_msg.send(AudioMessage::MusicLoadFailed {
                            id,
                            error: e.to_string(),
                        });
                    }
                },
                AudioCmd::PlayMusic {
                    id,
                    looped: want_loop,
                } => {
                    if let Some(music) = musics.get(&id) {
                        debug!("music play id='{}' looped={}", id, want_loop);
                        music.seek_stream(0.0);
                        music.play_stream();
                        playing.insert(id.clone());
                        if want_loop {
                            looped.insert(id);
                        } else {
                            looped.remove(&id);
                        }
                    }
                }
                AudioCmd::StopMusic { id } => {
                    if let Some(music) = musics.get(&id) {
                        music.stop_stream();
                        playing.remove(&id);
                        looped.remove(&id);
                    }
                }
                AudioCmd::PauseMusic { id } => {
                    if let Some(music) = musics.get(&id) {
                        music.pause_stream();
                    }
                }
                AudioCmd::ResumeMusic { id } => {
                    if let Some(music) = musics.get(&id) {
                        music.resume_stream();
                    }
                }
                AudioCmd::LoadFx { id, path } => match audio.new_sound(&path) {
                    Ok(sound) => {
                        debug!("loaded fx id='{}' path='{}'", id, path);
                        sounds.insert(id.clone(), sound);
                        let _ = tx_msg.send(AudioMessage::FxLoaded { id });
                    }
                    Err(e) => {
                        let _ = tx_msg.send(AudioMessage::FxLoadFailed {
                            id,
                            error: e.to_string(),
                        });
                    }
                },
                AudioCmd::PlayFx { id } => {
                    if let Some(sound) = sounds.get(&id) {
                        sound.play();
                    }
                }
                AudioCmd::Shutdown => break 'run,
            }
        }

        // 2) Pump playing streams; restart looped tracks that ran out.
        let mut finished: Vec<String> = Vec::new();
        for id in playing.iter() {
            if let Some(music) = musics.get(id) {
                music.update_stream();
                if !music.is_stream_playing() {
                    if looped.contains(id) {
                        music.seek_stream(0.0);
                        music.play_stream();
                    } else {
                        finished.push(id.clone());
                    }
                }
            }
        }
        for id in finished {
            playing.remove(&id);
            let _ = tx_msg.send(AudioMessage::MusicFinished { id });
        }

        std::thread::sleep(std::time::Duration::from_millis(10));
    }

    info!("audio thread exiting");
}
