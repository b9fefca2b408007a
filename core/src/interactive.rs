use std::io;

use crate::config::{BlynkSection, CredFile, ThingSpeakSection};
use crate::model::{Service, BLYNK_TOKEN, THINGSPEAK_CHANNEL, THINGSPEAK_TOKEN};

pub mod util {
    use dialoguer::{theme::ColorfulTheme, Input, Password};
    use std::io;

    fn theme() -> ColorfulTheme {
        ColorfulTheme::default()
    }

    pub fn ask_number(prompt: &str) -> io::Result<u64> {
        Input::with_theme(&theme())
            .with_prompt(prompt)
            .interact_text()
    }

    pub fn ask_secret(prompt: &str) -> io::Result<String> {
        Password::with_theme(&theme())
            .with_prompt(prompt)
            .interact()
    }
}

/// Prompt for every field of `service`, replacing its section in `file`.
pub fn ask_service(service: Service, file: &mut CredFile) -> io::Result<()> {
    use Service::*;
    match service {
        ThingSpeak => {
            let token = util::ask_secret(THINGSPEAK_TOKEN)?;
            let channel = util::ask_number(THINGSPEAK_CHANNEL)?;
            file.thingspeak = Some(ThingSpeakSection { token, channel });
        }
        Blynk => {
            let token = util::ask_secret(BLYNK_TOKEN)?;
            file.blynk = Some(BlynkSection { token });
        }
    }
    Ok(())
}
