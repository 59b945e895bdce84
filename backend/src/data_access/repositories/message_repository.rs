use redb::TableDefinition;

use crate::{
    data_access::{data_error::DataError, record::record, unit_of_work::UnitOfWork},
    message::Message,
};

pub(crate) const MESSAGES_TABLE: TableDefinition<u64, &[u8]> = TableDefinition::new("messages");

record!(Message, MESSAGES_TABLE);

pub struct MessageRepository<'a> {
    uow: &'a UnitOfWork,
}

impl<'a> MessageRepository<'a> {
    pub fn new(uow: &'a UnitOfWork) -> Self {
        Self { uow }
    }

    pub fn get(&self, id: u64) -> Result<Option<Message>, DataError> {
        self.uow.find(id)
    }

    /// Messages exchanged between two users, oldest first.
    pub fn get_conversation(&self, a: u64, b: u64) -> Result<Vec<Message>, DataError> {
        let mut messages = self.uow.filter(|m: &Message| m.involves(a, b))?;
        messages.sort_by(|x, y| x.timestamp.cmp(&y.timestamp).then(x.id.cmp(&y.id)));
        Ok(messages)
    }

    /// Everything a user sent or received, newest first.
    pub fn get_for_user(&self, user_id: u64) -> Result<Vec<Message>, DataError> {
        let mut messages = self
            .uow
            .filter(|m: &Message| m.sender_id == user_id || m.receiver_id == user_id)?;
        messages.sort_by(|x, y| y.timestamp.cmp(&x.timestamp).then(y.id.cmp(&x.id)));
        Ok(messages)
    }

    pub fn add(&self, message: &mut Message) -> Result<u64, DataError> {
        self.uow.insert(message)
    }

    pub fn update(&self, message: &Message) -> Result<(), DataError> {
        self.uow.put(message)
    }

    pub fn delete(&self, id: u64) -> Result<bool, DataError> {
        self.uow.remove::<Message>(id)
    }
}

#[cfg(test)]
mod tests {
    use crate::{data_access::data_context::DataContext, message::Message, message_send_request::MessageSendRequest};

    fn send(from: u64, to: u64, content: &str) -> Message {
        Message::new(MessageSendRequest { receiver_id: to, content: content.into(), upload: None }, from)
    }

    #[test]
    fn conversation_and_inbox_ordering() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = DataContext::new(dir.path().join("messages.redb")).unwrap();
        let uow = ctx.begin().unwrap();

        uow.messages().add(&mut send(1, 2, "hello")).unwrap();
        uow.messages().add(&mut send(2, 1, "hi back")).unwrap();
        uow.messages().add(&mut send(3, 1, "other thread")).unwrap();

        let conversation = uow.messages().get_conversation(2, 1).unwrap();
        let contents: Vec<_> = conversation.iter().map(|m| m.content.as_str()).collect();
        assert_eq!(contents, ["hello", "hi back"]);

        let inbox = uow.messages().get_for_user(1).unwrap();
        assert_eq!(inbox.len(), 3);
        assert_eq!(inbox[0].content, "other thread");
    }
}
