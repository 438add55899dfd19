//! Team chat channel and message events.

use super::payload::{GenericPayload, ObjectPayload, UpdatedPayload};
use wire_codec::models::{ChatChannel, ChatMessage};

event_family! {
    /// Channel, message and team chat events.
    ChatEvent => Chat {
        // channels
        "chat_channel.created" => ChannelCreated(ObjectPayload<ChatChannel>),
        "chat_channel.updated" => ChannelUpdated(ObjectPayload<ChatChannel>),
        "chat_channel.deleted" => ChannelDeleted(ObjectPayload<ChatChannel>),
        "chat_channel.member_invited" => ChannelMemberInvited(ObjectPayload<ChatChannel>),
        "chat_channel.member_joined" => ChannelMemberJoined(ObjectPayload<ChatChannel>),
        "chat_channel.member_left" => ChannelMemberLeft(ObjectPayload<ChatChannel>),
        "chat_channel.member_removed" => ChannelMemberRemoved(ObjectPayload<ChatChannel>),
        "chat_channel.archived" => ChannelArchived(ObjectPayload<ChatChannel>),
        "chat_channel.unarchived" => ChannelUnarchived(ObjectPayload<ChatChannel>),

        // messages
        "chat_message.sent" => MessageSent(ObjectPayload<ChatMessage>),
        "chat_message.updated" => MessageUpdated(ObjectPayload<ChatMessage>),
        "chat_message.deleted" => MessageDeleted(ObjectPayload<ChatMessage>),
        "chat_message.replied" => MessageReplied(ObjectPayload<ChatMessage>),

        // team chat
        "team_chat.channel_message_posted" => ChannelMessagePosted(ObjectPayload<ChatMessage>),
        "team_chat.channel_message_updated" => ChannelMessageUpdated(ObjectPayload<ChatMessage>),
        "team_chat.channel_message_deleted" => ChannelMessageDeleted(ObjectPayload<ChatMessage>),
        "team_chat.dm_message_posted" => DmMessagePosted(ObjectPayload<ChatMessage>),
        "team_chat.dm_message_updated" => DmMessageUpdated(ObjectPayload<ChatMessage>),
        "team_chat.dm_message_deleted" => DmMessageDeleted(ObjectPayload<ChatMessage>),
        "team_chat.channel_reaction_added" => ChannelReactionAdded(GenericPayload),
        "team_chat.channel_reaction_removed" => ChannelReactionRemoved(GenericPayload),
        "team_chat.dm_reaction_added" => DmReactionAdded(GenericPayload),
        "team_chat.dm_reaction_removed" => DmReactionRemoved(GenericPayload),
        "team_chat.file_uploaded" => FileUploaded(ObjectPayload<ChatMessage>),
        "team_chat.file_downloaded" => FileDownloaded(GenericPayload),
        "team_chat.file_deleted" => FileDeleted(GenericPayload),
        "team_chat.channel_settings_updated" => ChannelSettingsUpdated(UpdatedPayload),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::events::WebhookEvent;
    use crate::registry::EventRegistry;
    use serde_json::json;
    use wire_codec::scalar::KeyValuePair;

    #[test]
    fn test_member_invited_drops_members_without_id() {
        let registry = EventRegistry::standard().unwrap();
        let decode = registry.get("chat_channel.member_invited").unwrap();

        let event = decode(Some(&json!({
            "object": {
                "id": "ch-1",
                "name": "general",
                "members": [
                    {"id": "u1", "name": "Ada"},
                    {"name": "nobody"}
                ]
            }
        })))
        .unwrap();

        let WebhookEvent::Chat(ChatEvent::ChannelMemberInvited(payload)) = event else {
            unreachable!("chat_channel.member_invited decodes to ChannelMemberInvited");
        };
        assert_eq!(
            payload.object.unwrap().members,
            Some(vec![KeyValuePair::new("u1", "Ada")])
        );
    }

    #[test]
    fn test_message_sent_reads_epoch_millis() {
        let registry = EventRegistry::standard().unwrap();
        let decode = registry.get("chat_message.sent").unwrap();

        let event = decode(Some(&json!({
            "object": {"id": "m1", "message": "hi", "timestamp": 1_700_000_000_123_i64}
        })))
        .unwrap();

        let WebhookEvent::Chat(ChatEvent::MessageSent(payload)) = event else {
            unreachable!("chat_message.sent decodes to MessageSent");
        };
        let message = payload.object.unwrap();
        assert_eq!(message.timestamp.unwrap().timestamp_millis(), 1_700_000_000_123);
    }
}
