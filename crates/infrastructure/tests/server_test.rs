mod helpers;

use helpers::{
    make_handler, message_bytes_with_opcode, query_bytes, query_bytes_without_question,
    RecordingChannel, Sent,
};
use hickory_proto::op::{Message, MessageType, OpCode};
use hickory_proto::rr::RecordType as HickoryRecordType;
use std::net::{Ipv4Addr, SocketAddr};
use xip_dns_application::use_cases::DispatchOutcome;
use xip_dns_domain::{RecordType, TransportKind};

fn client() -> SocketAddr {
    "192.0.2.10:40000".parse().unwrap()
}

#[test]
fn test_decode_maps_question() {
    let handler = make_handler();
    let incoming = handler
        .decode(
            &query_bytes(7, "Foo.10.1.2.3.XIP.name.", HickoryRecordType::AAAA),
            client(),
            TransportKind::Udp,
        )
        .unwrap();

    assert_eq!(incoming.template.id(), 7);
    assert_eq!(incoming.request.client, client());
    assert_eq!(incoming.request.transport, TransportKind::Udp);
    let question = incoming.request.question().unwrap();
    assert_eq!(&*question.name, "Foo.10.1.2.3.XIP.name.");
    assert_eq!(question.record_type, RecordType::AAAA);
}

#[test]
fn test_decode_unknown_type_is_other() {
    let handler = make_handler();
    let incoming = handler
        .decode(
            &query_bytes(8, "xip.name.", HickoryRecordType::MX),
            client(),
            TransportKind::Tcp,
        )
        .unwrap();

    assert_eq!(
        incoming.request.question().unwrap().record_type,
        RecordType::Other(15)
    );
}

#[test]
fn test_decode_rejects_garbage() {
    let handler = make_handler();
    assert!(handler
        .decode(&[0xde, 0xad, 0xbe], client(), TransportKind::Udp)
        .is_none());
}

#[test]
fn test_decode_ignores_responses() {
    let handler = make_handler();
    let mut message = Message::from_vec(&query_bytes(9, "xip.name.", HickoryRecordType::A)).unwrap();
    message.set_message_type(MessageType::Response);

    assert!(handler
        .decode(&message.to_vec().unwrap(), client(), TransportKind::Udp)
        .is_none());
}

#[test]
fn test_decode_empty_question_section() {
    let handler = make_handler();
    let incoming = handler
        .decode(&query_bytes_without_question(10), client(), TransportKind::Udp)
        .unwrap();

    assert!(incoming.request.questions.is_empty());
}

#[tokio::test]
async fn test_handle_routes_zone_names_to_dispatcher() {
    let handler = make_handler();
    let incoming = handler
        .decode(
            &query_bytes(11, "10.10.10.10.xip.name.", HickoryRecordType::A),
            client(),
            TransportKind::Udp,
        )
        .unwrap();
    let mut channel = RecordingChannel::new();

    let outcome = handler.handle(&incoming.request, &mut channel).await;

    assert_eq!(outcome, DispatchOutcome::Replied);
    match &channel.sent[..] {
        [Sent::Reply(reply)] => {
            assert_eq!(reply.answers[0].name(), "10.10.10.10.xip.name.");
            assert_eq!(reply.answers[0].address(), Some(Ipv4Addr::new(10, 10, 10, 10)));
        }
        other => panic!("unexpected writes: {:?}", other),
    }
}

#[tokio::test]
async fn test_handle_refuses_names_outside_zone() {
    let handler = make_handler();
    let incoming = handler
        .decode(
            &query_bytes(12, "10.0.0.1.example.com.", HickoryRecordType::A),
            client(),
            TransportKind::Udp,
        )
        .unwrap();
    let mut channel = RecordingChannel::new();

    let outcome = handler.handle(&incoming.request, &mut channel).await;

    assert_eq!(outcome, DispatchOutcome::Refused);
    assert_eq!(channel.sent, vec![Sent::Refused]);
}

#[tokio::test]
async fn test_handle_zone_match_is_case_insensitive() {
    let handler = make_handler();
    let incoming = handler
        .decode(
            &query_bytes(13, "WWW.XIP.NAME.", HickoryRecordType::A),
            client(),
            TransportKind::Udp,
        )
        .unwrap();
    let mut channel = RecordingChannel::new();

    let outcome = handler.handle(&incoming.request, &mut channel).await;

    assert_eq!(outcome, DispatchOutcome::Replied);
}

#[tokio::test]
async fn test_handle_empty_question_writes_nothing() {
    let handler = make_handler();
    let incoming = handler
        .decode(&query_bytes_without_question(14), client(), TransportKind::Udp)
        .unwrap();
    let mut channel = RecordingChannel::new();

    let outcome = handler.handle(&incoming.request, &mut channel).await;

    assert_eq!(outcome, DispatchOutcome::Dropped);
    assert!(channel.sent.is_empty());
}

#[tokio::test]
async fn test_handle_zone_transfer_hijacks_channel() {
    let handler = make_handler();
    let incoming = handler
        .decode(
            &query_bytes(15, "xip.name.", HickoryRecordType::AXFR),
            client(),
            TransportKind::Tcp,
        )
        .unwrap();
    let mut channel = RecordingChannel::new();

    let outcome = handler.handle(&incoming.request, &mut channel).await;

    assert_eq!(outcome, DispatchOutcome::Transferred);
    assert!(channel.hijacked);
    assert!(matches!(&channel.sent[..], [Sent::Transfer(_)]));
}

#[tokio::test]
async fn test_respond_answers_non_query_opcodes_with_notimp() {
    let handler = make_handler();
    for op_code in [OpCode::Update, OpCode::Notify, OpCode::Status] {
        let incoming = handler
            .decode(
                &message_bytes_with_opcode(16, "1.2.3.4.xip.name.", op_code),
                client(),
                TransportKind::Udp,
            )
            .unwrap();
        let mut channel = RecordingChannel::new();

        let outcome = handler.respond(&incoming, &mut channel).await;

        assert_eq!(outcome, DispatchOutcome::NotImplemented, "{:?}", op_code);
        assert_eq!(channel.sent, vec![Sent::NotImplemented]);
    }
}

#[tokio::test]
async fn test_respond_dispatches_standard_queries() {
    let handler = make_handler();
    let incoming = handler
        .decode(
            &query_bytes(17, "1.2.3.4.xip.name.", HickoryRecordType::A),
            client(),
            TransportKind::Udp,
        )
        .unwrap();
    let mut channel = RecordingChannel::new();

    let outcome = handler.respond(&incoming, &mut channel).await;

    assert_eq!(outcome, DispatchOutcome::Replied);
    assert!(matches!(&channel.sent[..], [Sent::Reply(_)]));
}
