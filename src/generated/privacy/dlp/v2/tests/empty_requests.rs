// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Every request builder sends a zero-valued request unchanged.

#[cfg(test)]
mod empty_requests {
    use gax::options::RequestOptions;
    use gax::response::Response;
    use google_cloud_privacy_dlp_v2 as dlp;
    use pretty_assertions::assert_eq;
    use std::sync::{Arc, Mutex};
    use test_case::test_case;

    #[derive(Debug, PartialEq)]
    struct Call {
        method: &'static str,
        empty: bool,
        metadata: Vec<(String, String)>,
    }

    #[derive(Debug, Default)]
    struct Recorder {
        calls: Arc<Mutex<Vec<Call>>>,
    }

    impl Recorder {
        fn record(&self, method: &'static str, empty: bool, options: RequestOptions) {
            let call = Call {
                method,
                empty,
                metadata: options.metadata().to_vec(),
            };
            self.calls.lock().expect("calls lock").push(call);
        }
    }

    macro_rules! recorder {
        ($($method:ident: $request:ident => $response:ident;)*) => {
            impl dlp::stub::DlpService for Recorder {
                $(
                    async fn $method(
                        &self,
                        req: dlp::model::$request,
                        options: RequestOptions,
                    ) -> dlp::Result<Response<dlp::model::$response>> {
                        let empty = req == dlp::model::$request::default();
                        self.record(stringify!($method), empty, options);
                        Ok(Response::from(dlp::model::$response::default()))
                    }
                )*
            }
        };
    }

    recorder! {
        inspect_content: InspectContentRequest => InspectContentResponse;
        deidentify_content: DeidentifyContentRequest => DeidentifyContentResponse;
        reidentify_content: ReidentifyContentRequest => ReidentifyContentResponse;
        list_info_types: ListInfoTypesRequest => ListInfoTypesResponse;
        create_inspect_template: CreateInspectTemplateRequest => InspectTemplate;
        update_inspect_template: UpdateInspectTemplateRequest => InspectTemplate;
        get_inspect_template: GetInspectTemplateRequest => InspectTemplate;
        list_inspect_templates: ListInspectTemplatesRequest => ListInspectTemplatesResponse;
        delete_inspect_template: DeleteInspectTemplateRequest => Empty;
        create_deidentify_template: CreateDeidentifyTemplateRequest => DeidentifyTemplate;
        update_deidentify_template: UpdateDeidentifyTemplateRequest => DeidentifyTemplate;
        get_deidentify_template: GetDeidentifyTemplateRequest => DeidentifyTemplate;
        list_deidentify_templates: ListDeidentifyTemplatesRequest => ListDeidentifyTemplatesResponse;
        delete_deidentify_template: DeleteDeidentifyTemplateRequest => Empty;
        create_job_trigger: CreateJobTriggerRequest => JobTrigger;
        update_job_trigger: UpdateJobTriggerRequest => JobTrigger;
        get_job_trigger: GetJobTriggerRequest => JobTrigger;
        list_job_triggers: ListJobTriggersRequest => ListJobTriggersResponse;
        delete_job_trigger: DeleteJobTriggerRequest => Empty;
        activate_job_trigger: ActivateJobTriggerRequest => DlpJob;
        create_dlp_job: CreateDlpJobRequest => DlpJob;
        list_dlp_jobs: ListDlpJobsRequest => ListDlpJobsResponse;
        get_dlp_job: GetDlpJobRequest => DlpJob;
        delete_dlp_job: DeleteDlpJobRequest => Empty;
        cancel_dlp_job: CancelDlpJobRequest => Empty;
        create_discovery_config: CreateDiscoveryConfigRequest => DiscoveryConfig;
        update_discovery_config: UpdateDiscoveryConfigRequest => DiscoveryConfig;
        get_discovery_config: GetDiscoveryConfigRequest => DiscoveryConfig;
        list_discovery_configs: ListDiscoveryConfigsRequest => ListDiscoveryConfigsResponse;
        delete_discovery_config: DeleteDiscoveryConfigRequest => Empty;
    }

    async fn send_empty(client: &dlp::client::DlpService, method: &str) -> anyhow::Result<()> {
        match method {
            "inspect_content" => client.inspect_content().send().await.map(|_| ())?,
            "deidentify_content" => client.deidentify_content().send().await.map(|_| ())?,
            "reidentify_content" => client.reidentify_content().send().await.map(|_| ())?,
            "list_info_types" => client.list_info_types().send().await.map(|_| ())?,
            "create_inspect_template" => client.create_inspect_template().send().await.map(|_| ())?,
            "update_inspect_template" => client.update_inspect_template().send().await.map(|_| ())?,
            "get_inspect_template" => client.get_inspect_template().send().await.map(|_| ())?,
            "list_inspect_templates" => client.list_inspect_templates().send().await.map(|_| ())?,
            "delete_inspect_template" => client.delete_inspect_template().send().await.map(|_| ())?,
            "create_deidentify_template" => client.create_deidentify_template().send().await.map(|_| ())?,
            "update_deidentify_template" => client.update_deidentify_template().send().await.map(|_| ())?,
            "get_deidentify_template" => client.get_deidentify_template().send().await.map(|_| ())?,
            "list_deidentify_templates" => client.list_deidentify_templates().send().await.map(|_| ())?,
            "delete_deidentify_template" => client.delete_deidentify_template().send().await.map(|_| ())?,
            "create_job_trigger" => client.create_job_trigger().send().await.map(|_| ())?,
            "update_job_trigger" => client.update_job_trigger().send().await.map(|_| ())?,
            "get_job_trigger" => client.get_job_trigger().send().await.map(|_| ())?,
            "list_job_triggers" => client.list_job_triggers().send().await.map(|_| ())?,
            "delete_job_trigger" => client.delete_job_trigger().send().await.map(|_| ())?,
            "activate_job_trigger" => client.activate_job_trigger().send().await.map(|_| ())?,
            "create_dlp_job" => client.create_dlp_job().send().await.map(|_| ())?,
            "list_dlp_jobs" => client.list_dlp_jobs().send().await.map(|_| ())?,
            "get_dlp_job" => client.get_dlp_job().send().await.map(|_| ())?,
            "delete_dlp_job" => client.delete_dlp_job().send().await.map(|_| ())?,
            "cancel_dlp_job" => client.cancel_dlp_job().send().await.map(|_| ())?,
            "create_discovery_config" => client.create_discovery_config().send().await.map(|_| ())?,
            "update_discovery_config" => client.update_discovery_config().send().await.map(|_| ())?,
            "get_discovery_config" => client.get_discovery_config().send().await.map(|_| ())?,
            "list_discovery_configs" => client.list_discovery_configs().send().await.map(|_| ())?,
            "delete_discovery_config" => client.delete_discovery_config().send().await.map(|_| ())?,
            _ => anyhow::bail!("unknown method {method}"),
        }
        Ok(())
    }

    #[test_case("inspect_content", Some("parent="))]
    #[test_case("deidentify_content", Some("parent="))]
    #[test_case("reidentify_content", Some("parent="))]
    #[test_case("list_info_types", None)]
    #[test_case("create_inspect_template", Some("parent="))]
    #[test_case("update_inspect_template", Some("name="))]
    #[test_case("get_inspect_template", Some("name="))]
    #[test_case("list_inspect_templates", Some("parent="))]
    #[test_case("delete_inspect_template", Some("name="))]
    #[test_case("create_deidentify_template", Some("parent="))]
    #[test_case("update_deidentify_template", Some("name="))]
    #[test_case("get_deidentify_template", Some("name="))]
    #[test_case("list_deidentify_templates", Some("parent="))]
    #[test_case("delete_deidentify_template", Some("name="))]
    #[test_case("create_job_trigger", Some("parent="))]
    #[test_case("update_job_trigger", Some("name="))]
    #[test_case("get_job_trigger", Some("name="))]
    #[test_case("list_job_triggers", Some("parent="))]
    #[test_case("delete_job_trigger", Some("name="))]
    #[test_case("activate_job_trigger", Some("name="))]
    #[test_case("create_dlp_job", Some("parent="))]
    #[test_case("list_dlp_jobs", Some("parent="))]
    #[test_case("get_dlp_job", Some("name="))]
    #[test_case("delete_dlp_job", Some("name="))]
    #[test_case("cancel_dlp_job", Some("name="))]
    #[test_case("create_discovery_config", Some("parent="))]
    #[test_case("update_discovery_config", Some("name="))]
    #[test_case("get_discovery_config", Some("name="))]
    #[test_case("list_discovery_configs", Some("parent="))]
    #[test_case("delete_discovery_config", Some("name="))]
    #[tokio::test]
    async fn zero_valued_request(method: &'static str, routing: Option<&str>) -> anyhow::Result<()> {
        let recorder = Recorder::default();
        let calls = recorder.calls.clone();
        let client = dlp::client::DlpService::from_stub(recorder);
        send_empty(&client, method).await?;

        let metadata = routing
            .map(|v| vec![(gax::routing::ROUTING_HEADER.to_string(), v.to_string())])
            .unwrap_or_default();
        let want = vec![Call {
            method,
            empty: true,
            metadata,
        }];
        let got = calls.lock().expect("calls lock");
        assert_eq!(*got, want);
        Ok(())
    }
}
