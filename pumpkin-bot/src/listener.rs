use std::cmp::Reverse;

use pumpkin_protocol::client::ClientboundPacket;

use crate::client::Client;
use crate::error::BotError;

pub type ListenerFn = Box<dyn Fn(&Client, &ClientboundPacket) -> Result<(), BotError> + Send + Sync>;

struct Listener {
    /// `None` listens to every packet.
    packet_id: Option<u32>,
    priority: i32,
    handler: ListenerFn,
}

/// Packet callbacks, run in descending priority. Listeners for every packet run before the ones
/// registered for a single packet id.
#[derive(Default)]
pub struct Listeners {
    generic: Vec<Listener>,
    specific: Vec<Listener>,
}

impl Listeners {
    pub fn add(&mut self, packet_id: Option<u32>, priority: i32, handler: ListenerFn) {
        let listeners = if packet_id.is_some() {
            &mut self.specific
        } else {
            &mut self.generic
        };
        listeners.push(Listener {
            packet_id,
            priority,
            handler,
        });
        // stable, equal priorities keep registration order
        listeners.sort_by_key(|listener| Reverse(listener.priority));
    }

    /// Stops at the first listener that fails.
    pub fn dispatch(&self, client: &Client, packet: &ClientboundPacket) -> Result<(), BotError> {
        let id = packet.packet_id();
        let specific = self
            .specific
            .iter()
            .filter(|listener| listener.packet_id == Some(id));
        for listener in self.generic.iter().chain(specific) {
            (listener.handler)(client, packet)?;
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.generic.len() + self.specific.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
