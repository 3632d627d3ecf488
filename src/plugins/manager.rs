use reqwest::Client;
use std::collections::HashMap;

use super::notifiers::{DiscordNotifier, SmsNotifier, TelegramNotifier, TwitterNotifier};
use super::traits::{Channel, NOTIFY_ORDER, Notifier};
use crate::config::RunConfig;

pub type NotifierBox = Box<dyn Notifier>;

/// The senders enabled for this run, one per channel.
#[derive(Default)]
pub struct NotifierSet {
    notifiers: HashMap<Channel, NotifierBox>,
}

impl NotifierSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a sender for every channel that has credentials in `config`.
    pub fn from_config(config: &RunConfig, client: &Client) -> Self {
        let mut set = Self::new();

        if let Some(sms) = &config.sms {
            set.register(Box::new(SmsNotifier::new(sms.clone(), client.clone())));
        }
        if let Some(twitter) = &config.twitter {
            set.register(Box::new(TwitterNotifier::new(twitter.clone(), client.clone())));
        }
        if let Some(discord) = &config.discord {
            set.register(Box::new(DiscordNotifier::new(discord.clone(), client.clone())));
        }
        if let Some(telegram) = &config.telegram {
            set.register(Box::new(TelegramNotifier::new(telegram.clone(), client.clone())));
        }

        set
    }

    /// Register a sender, replacing any previous one for the same channel.
    pub fn register(&mut self, notifier: NotifierBox) -> Option<NotifierBox> {
        let channel = notifier.channel();
        self.notifiers.insert(channel, notifier)
    }

    pub fn has_notifier(&self, channel: Channel) -> bool {
        self.notifiers.contains_key(&channel)
    }

    pub fn get(&self, channel: Channel) -> Option<&dyn Notifier> {
        self.notifiers.get(&channel).map(|n| n.as_ref())
    }

    /// Registered channels in notification order.
    pub fn channels(&self) -> Vec<Channel> {
        NOTIFY_ORDER
            .iter()
            .copied()
            .filter(|c| self.has_notifier(*c))
            .collect()
    }

    /// Registered senders, yielded in `order`. Channels without a sender are
    /// skipped.
    pub fn in_order<'a>(
        &'a self,
        order: &'a [Channel],
    ) -> impl Iterator<Item = &'a dyn Notifier> + 'a {
        order.iter().filter_map(move |channel| self.get(*channel))
    }

    pub fn len(&self) -> usize {
        self.notifiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notifiers.is_empty()
    }
}
