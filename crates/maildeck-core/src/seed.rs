//! Canned demo data.
//!
//! One demo user, a six-message conversation thread, a few standalone
//! emails, documents with triage highlights, and one pre-seeded draft reply.

use chrono::{DateTime, Duration, Utc};
use tracing::info;

use crate::document::NewDocument;
use crate::email::NewEmail;
use crate::highlight::NewHighlight;
use crate::reply::NewReply;
use crate::user::{NewUser, UserId};
use crate::{DocumentId, EmailId, Result, Store};

const DEMO_AVATAR: &str = "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D&auto=format&fit=facearea&facepad=2&w=256&h=256&q=80";

const PROJECT_THREAD: &str = "thread-project-timeline";

/// Populate the store with the demo data set.
///
/// # Errors
///
/// Returns an error if any insert fails.
pub(crate) async fn populate(store: &Store) -> Result<()> {
    let now = Utc::now();

    let user = store
        .users()
        .create(&NewUser {
            username: "demo".into(),
            password: "password123".into(),
            email: "demo@example.com".into(),
            avatar: Some(DEMO_AVATAR.into()),
        })
        .await?;

    for email in sample_emails(user.id, now) {
        store.emails().create(&email).await?;
    }

    for document in sample_documents(user.id, now) {
        store.documents().create(&document).await?;
    }

    for highlight in sample_highlights() {
        store.highlights().create(&highlight).await?;
    }

    // Pre-seeded draft so the reply panel has content on first load.
    store
        .replies()
        .create(&NewReply {
            email_id: EmailId::new(2),
            content: "Hello Alex,\n\nThank you for sharing the meeting notes. I've reviewed them and agree with the proposed timeline adjustments.\n\nRegarding the key points you mentioned:\n1. I can commit to completing the first milestone by next Wednesday.\n2. The resource allocation looks appropriate for our current phase.\n3. I've noted the new stakeholder requirements and will incorporate them into our next sprint planning.\n\nI've also taken note of the action items assigned to me and will update our project management tool accordingly.\n\nIs there anything specific you'd like me to prioritize before our next check-in?\n\nBest regards,\nDemo User".into(),
            subject: "Re: Meeting notes from yesterday's call".into(),
            tone: Some("Formal".into()),
            length: Some("Concise".into()),
            is_draft: true,
        })
        .await?;

    info!("seeded demo data");
    Ok(())
}

#[allow(clippy::too_many_lines)] // canned data, one entry per email
fn sample_emails(user_id: UserId, now: DateTime<Utc>) -> Vec<NewEmail> {
    let email = |sender: &str,
                 sender_email: &str,
                 recipients: &[&str],
                 subject: &str,
                 body: &str,
                 preview: &str,
                 timestamp: DateTime<Utc>,
                 is_read: bool,
                 labels: &[&str],
                 thread_id: Option<&str>| NewEmail {
        user_id,
        sender: sender.into(),
        sender_email: sender_email.into(),
        recipients: recipients.iter().map(|&r| r.into()).collect(),
        subject: subject.into(),
        body: body.into(),
        preview: preview.into(),
        timestamp,
        is_read,
        labels: labels.iter().map(|&l| l.into()).collect(),
        thread_id: thread_id.map(Into::into),
    };

    vec![
        // The "Update on Project Timeline" conversation with Jane Smith.
        email(
            "Jane Smith",
            "jane.smith@example.com",
            &["demo@example.com"],
            "Update on Project Timeline",
            "Hi there,\n\nI wanted to provide a quick update on the project timeline. We've made significant progress on the first milestone and we're on track to deliver by the end of the week.\n\nThe team has been working diligently, and I'm pleased with the progress so far. The client feedback has been positive as well.\n\nLet's schedule a meeting next week to discuss the details in more depth.\n\nBest regards,\nJane",
            "Hi there, I wanted to provide a quick update on the project timeline. We've made significant progress on the first milestone and...",
            now - Duration::days(8),
            true,
            &["Work"],
            Some(PROJECT_THREAD),
        ),
        email(
            "Demo User",
            "demo@example.com",
            &["jane.smith@example.com"],
            "Re: Update on Project Timeline",
            "Hi Jane,\n\nThanks for the update. Great to hear about our progress! I'd like to get some specific details about the completed tasks and any challenges you're anticipating for the next phase.\n\nRegarding the meeting, I'm available next Tuesday afternoon or Wednesday morning. What works for you?\n\nBest,\nDemo",
            "Hi Jane, Thanks for the update. Great to hear about our progress! I'd like to get some specific details about...",
            now - Duration::days(7),
            true,
            &["Work"],
            Some(PROJECT_THREAD),
        ),
        email(
            "Jane Smith",
            "jane.smith@example.com",
            &["demo@example.com"],
            "Re: Update on Project Timeline",
            "Hello,\n\nWednesday morning works for me. How about 10:30 AM? Here are the key completed tasks:\n\n1. Backend API integration\n2. User authentication flow\n3. Initial database schema optimization\n\nFor the next phase, I'm concerned about the timeline for the reporting feature. We may need additional resources to complete it on schedule.\n\nI'll prepare a detailed analysis for our meeting.\n\nRegards,\nJane",
            "Hello, Wednesday morning works for me. How about 10:30 AM? Here are the key completed tasks: 1. Backend API integration...",
            now - Duration::days(6),
            true,
            &["Work", "Meeting"],
            Some(PROJECT_THREAD),
        ),
        email(
            "Demo User",
            "demo@example.com",
            &["jane.smith@example.com"],
            "Re: Update on Project Timeline",
            "Jane,\n\n10:30 AM on Wednesday is perfect. Thanks for the task breakdown.\n\nI understand your concern about the reporting feature. Let's discuss resource allocation during our meeting. I might be able to bring in someone from Team B to assist.\n\nAlso, could you share the latest project dashboard before our meeting?\n\nBest,\nDemo",
            "Jane, 10:30 AM on Wednesday is perfect. Thanks for the task breakdown. I understand your concern about the reporting feature...",
            now - Duration::days(5),
            true,
            &["Work", "Meeting"],
            Some(PROJECT_THREAD),
        ),
        email(
            "Jane Smith",
            "jane.smith@example.com",
            &["demo@example.com"],
            "Re: Update on Project Timeline",
            "Hi Demo,\n\nI've just sent you access to the latest project dashboard. You should receive an email with the login credentials shortly.\n\nThe data shows we're making good progress, but there's a bottleneck in the testing phase that we should address.\n\nGreat idea about Team B - I've already had an informal chat with Sarah, and she's potentially available to help.\n\nLooking forward to our meeting,\nJane",
            "Hi Demo, I've just sent you access to the latest project dashboard. You should receive an email with the login credentials shortly...",
            now - Duration::days(4),
            true,
            &["Work"],
            Some(PROJECT_THREAD),
        ),
        email(
            "Jane Smith",
            "jane.smith@example.com",
            &["demo@example.com", "team@example.com"],
            "Re: Update on Project Timeline - Meeting Summary",
            "Hello everyone,\n\nThank you for joining our meeting this morning. Here's a summary of what we discussed and the action items:\n\n1. Current progress: On track for Milestone 1\n2. Additional resources: Sarah from Team B will join us at 25% capacity starting next week\n3. Testing bottleneck: We're implementing a new automated testing framework to address this\n4. Next deliverable: Updated timeline will be shared by Friday\n\nPlease let me know if I missed anything important.\n\nBest regards,\nJane",
            "Hello everyone, Thank you for joining our meeting this morning. Here's a summary of what we discussed and the action items...",
            now - Duration::days(3),
            false,
            &["Work", "Important"],
            Some(PROJECT_THREAD),
        ),
        // Standalone emails.
        email(
            "Alex Johnson",
            "alex.johnson@example.com",
            &["demo@example.com"],
            "Meeting notes from yesterday's call",
            "Hello team, I've attached the meeting notes from our call yesterday. We discussed the following key points:\n1. Project timeline adjustments\n2. Resource allocation for the next phase\n3. New stakeholder requirements\n\nPlease review and let me know if I missed anything important. We'll need to follow up on these items in our next meeting.",
            "Hello team, I've attached the meeting notes from our call yesterday. We discussed the following key points: 1. Project timeline adjustments...",
            now - Duration::days(2),
            true,
            &["Meeting", "Important"],
            Some("thread-meeting-notes"),
        ),
        email(
            "Michael Chen",
            "michael.chen@example.com",
            &["demo@example.com"],
            "Quarterly report review request",
            "Hi team, Could you please review the attached quarterly report before our presentation next week? I'd appreciate your feedback on the data analysis section in particular. Let's make sure we're all aligned on the key findings before presenting to the stakeholders.",
            "Hi team, Could you please review the attached quarterly report before our presentation next week? I'd appreciate your feedback on...",
            now - Duration::days(1),
            false,
            &["Urgent"],
            Some("thread-quarterly-report"),
        ),
        email(
            "Sarah Parker",
            "sarah.parker@example.com",
            &["demo@example.com"],
            "In-Person Meeting Next Week",
            "Hello,\n\nI'd like to schedule an in-person meeting next Wednesday at 2:00 PM to discuss the upcoming product launch.\n\nMeeting Details:\nDate: Wednesday, May 17, 2025\nTime: 2:00 PM - 3:30 PM\nLocation: Skyline Conference Center, 123 Business Avenue, San Francisco, CA 94103\n\nPlease let me know if you can attend. I've also attached the preliminary agenda for the meeting.\n\nBest regards,\nSarah Parker\nProduct Marketing Manager",
            "Hello, I'd like to schedule an in-person meeting next Wednesday at 2:00 PM to discuss the upcoming product launch. Meeting Details: Date...",
            now - Duration::hours(6),
            false,
            &["Meeting", "Important", "Calendar"],
            Some("thread-product-launch"),
        ),
    ]
}

fn sample_documents(user_id: UserId, now: DateTime<Utc>) -> Vec<NewDocument> {
    let document = |name: &str,
                    kind: &str,
                    description: &str,
                    date: DateTime<Utc>,
                    content: &str,
                    tags: &[&str]| NewDocument {
        user_id,
        name: name.into(),
        kind: kind.into(),
        description: Some(description.into()),
        date,
        content: Some(content.into()),
        tags: tags.iter().map(|&t| t.into()).collect(),
    };

    vec![
        document(
            "Meeting Notes.docx",
            "docx",
            "Team meeting notes discussing project timeline and resource allocation.",
            now - Duration::days(2),
            "Full content of the meeting notes document",
            &["Document", "Team"],
        ),
        document(
            "Project Timeline.xlsx",
            "xlsx",
            "Updated project timeline with milestones and deadlines.",
            now - Duration::days(3),
            "Full content of the project timeline document",
            &["Document", "Project"],
        ),
        document(
            "Requirements Doc.pdf",
            "pdf",
            "Detailed requirements document for the current project phase.",
            now - Duration::days(7),
            "Full content of the requirements document",
            &["Document", "Requirements"],
        ),
    ]
}

fn sample_highlights() -> Vec<NewHighlight> {
    let highlight = |title: &str, content: &str, page: i64, priority: &str, category: &str| {
        NewHighlight {
            document_id: DocumentId::new(1),
            title: title.into(),
            content: content.into(),
            page: Some(page),
            priority: Some(priority.into()),
            category: Some(category.into()),
        }
    };

    vec![
        highlight(
            "Key Decision Point",
            "The team has agreed to push back the delivery date for Phase 2 from June 15 to June 30 to accommodate additional requirements from the client.",
            1,
            "High Priority",
            "Decision",
        ),
        highlight(
            "Resource Allocation",
            "Two additional developers will be assigned to the project starting next week to help meet the new deadlines. The budget has been approved for these additional resources.",
            2,
            "Medium Priority",
            "Resources",
        ),
        highlight(
            "Action Item",
            "All team members need to update their sections of the project management tool with current status and blockers by end of day Friday.",
            3,
            "Assigned to You",
            "Action",
        ),
        highlight(
            "Client Requirement",
            "The client has requested additional analytics features in the dashboard to track user engagement metrics. This should be included in the next sprint planning session.",
            4,
            "New Requirement",
            "Requirement",
        ),
    ]
}
