#[cfg(test)]
mod tests {
    use super::super::*;
    use crate::api::test_helpers::create_test_client;
    use mockito::{Matcher, Server};

    #[test]
    fn test_vm_paths() {
        assert_eq!(vm_path("42"), "/api/vms/42");
        assert_eq!(restrictions_path("42"), "/api/vms/42/restrictions");
        assert_eq!(
            param_path("42", "extendedConfigFile"),
            "/api/vms/42/params/extendedConfigFile"
        );
        assert_eq!(param_path("42", "a b"), "/api/vms/42/params/a%20b");
    }

    #[tokio::test]
    async fn test_list_vms() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("GET", "/api/vms")
            .with_status(200)
            .with_header("content-type", "application/vnd.vmware.vmw.rest-v1+json")
            .with_body(
                r#"[
                    {"id": "0J319913PHLM1304J1P6EPLADAM", "path": "G:\\VMs\\ESXi\\ESXi.vmx"},
                    {"id": "19915KM24UQ0J0OADAMH69H16T125LOL", "path": "G:\\VMs\\pfsense\\pfsense.vmx"}
                ]"#,
            )
            .create_async()
            .await;

        let client = create_test_client(&server.url());
        let vms = client.vms().list().await.unwrap();

        assert_eq!(vms.len(), 2);
        assert_eq!(vms[0].id, "0J319913PHLM1304J1P6EPLADAM");
        assert_eq!(vms[1].path, "G:\\VMs\\pfsense\\pfsense.vmx");
    }

    #[tokio::test]
    async fn test_get_vm() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("GET", "/api/vms/42")
            .with_body(r#"{"cpu":{"processors":1},"id":"42","memory":2048}"#)
            .create_async()
            .await;

        let client = create_test_client(&server.url());
        let vm = client.vms().vm("42").get().await.unwrap();

        assert_eq!(vm["id"], "42");
        assert_eq!(vm["cpu"]["processors"], 1);
        assert_eq!(vm["memory"], 2048);
    }

    #[tokio::test]
    async fn test_get_restrictions() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("GET", "/api/vms/42/restrictions")
            .with_body(
                r#"{"id":"42","memory":1024,"guestIsolation":{"copyDisabled":false,"hgfsDisabled":true}}"#,
            )
            .create_async()
            .await;

        let client = create_test_client(&server.url());
        let restrictions = client.vms().vm("42").restrictions().await.unwrap();

        assert_eq!(restrictions["guestIsolation"]["hgfsDisabled"], true);
    }

    #[tokio::test]
    async fn test_get_param() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("GET", "/api/vms/42/params/extendedConfigFile")
            .with_body(r#"{"name":"extendedConfigFile","value":"pfsense.vmxf"}"#)
            .create_async()
            .await;

        let client = create_test_client(&server.url());
        let param = client
            .vms()
            .vm("42")
            .param("extendedConfigFile")
            .await
            .unwrap();

        assert_eq!(
            param,
            VmParameter {
                name: "extendedConfigFile".to_string(),
                value: "pfsense.vmxf".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_list_nics() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("GET", "/api/vms/42/nic")
            .with_body(
                r#"{"num":2,"nics":[
                    {"index":1,"type":"custom","vmnet":"vmnet2","macAddress":"00:0C:29:5B:FD:35"},
                    {"index":2,"type":"nat","vmnet":"vmnet8","macAddress":"00:0C:29:5B:FD:3F"}
                ]}"#,
            )
            .create_async()
            .await;

        let client = create_test_client(&server.url());
        let nics = client.vms().vm("42").nics().list().await.unwrap();

        assert_eq!(nics.num, 2);
        assert_eq!(nics.nics[0].vmnet, "vmnet2");
        assert_eq!(nics.nics[1].nic_type, "nat");
        assert_eq!(nics.nics[1].mac_address, "00:0C:29:5B:FD:3F");
    }

    #[tokio::test]
    async fn test_get_ip() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("GET", "/api/vms/42/ip")
            .with_body(r#"{"ip":"192.168.56.10"}"#)
            .create_async()
            .await;

        let client = create_test_client(&server.url());
        let ip = client.vms().vm("42").nics().ip().await.unwrap();
        assert_eq!(ip.ip, "192.168.56.10");
    }

    #[tokio::test]
    async fn test_update_nic_sends_vmnet_for_custom() {
        let mut server = Server::new_async().await;
        let m = server
            .mock("PUT", "/api/vms/42/nic/1")
            .match_body(Matcher::JsonString(
                r#"{"type":"custom","vmnet":"vmnet10"}"#.to_string(),
            ))
            .with_body(r#"{"index":1,"type":"custom","vmnet":"vmnet10","macAddress":"00:0C:29:5B:FD:35"}"#)
            .create_async()
            .await;

        let client = create_test_client(&server.url());
        let request = NicRequest::new(NicType::Custom, Some("vmnet10".to_string()));
        let result = client.vms().vm("42").nics().update(1, &request).await;

        assert!(result.is_ok());
        m.assert_async().await;
    }

    #[tokio::test]
    async fn test_create_nic_drops_vmnet_for_non_custom() {
        let mut server = Server::new_async().await;
        let m = server
            .mock("POST", "/api/vms/42/nic")
            .match_body(Matcher::JsonString(r#"{"type":"bridged"}"#.to_string()))
            .with_status(201)
            .with_body(r#"{"index":3,"type":"bridged","vmnet":"vmnet0","macAddress":""}"#)
            .create_async()
            .await;

        let client = create_test_client(&server.url());
        let request = NicRequest::new(NicType::Bridged, Some("vmnet5".to_string()));
        let created = client.vms().vm("42").nics().create(&request).await.unwrap();

        assert_eq!(created["index"], 3);
        m.assert_async().await;
    }

    #[tokio::test]
    async fn test_delete_nic() {
        let mut server = Server::new_async().await;
        let m = server
            .mock("DELETE", "/api/vms/42/nic/2")
            .with_status(204)
            .create_async()
            .await;

        let client = create_test_client(&server.url());
        let result = client.vms().vm("42").nics().delete(2).await.unwrap();

        assert!(result.is_null());
        m.assert_async().await;
    }

    #[tokio::test]
    async fn test_shared_folder_lifecycle_paths() {
        let mut server = Server::new_async().await;
        let create = server
            .mock("POST", "/api/vms/42/sharedfolders")
            .match_body(Matcher::Json(serde_json::json!({
                "folder_id": "ODBG110",
                "host_path": "C:\\Users\\qsypoq\\Desktop\\odbg110",
                "flags": 4
            })))
            .with_body(r#"[{"folder_id":"ODBG110","host_path":"C:\\Users\\qsypoq\\Desktop\\odbg110","flags":4}]"#)
            .create_async()
            .await;
        let update = server
            .mock("PUT", "/api/vms/42/sharedfolders/ODBG110")
            .match_body(Matcher::Json(serde_json::json!({
                "host_path": "D:\\tools",
                "flags": 0
            })))
            .with_body(r#"[{"folder_id":"ODBG110","host_path":"D:\\tools","flags":0}]"#)
            .create_async()
            .await;
        let delete = server
            .mock("DELETE", "/api/vms/42/sharedfolders/ODBG110")
            .with_status(204)
            .create_async()
            .await;

        let client = create_test_client(&server.url());
        let vm = client.vms().vm("42");
        let folders = vm.shared_folders();

        folders
            .create(&SharedFolderRequest {
                folder_id: "ODBG110".to_string(),
                host_path: "C:\\Users\\qsypoq\\Desktop\\odbg110".to_string(),
                flags: FolderAccess::Rw.flags(),
            })
            .await
            .unwrap();
        folders
            .update(
                "ODBG110",
                &SharedFolderUpdate {
                    host_path: "D:\\tools".to_string(),
                    flags: FolderAccess::Ro.flags(),
                },
            )
            .await
            .unwrap();
        folders.delete("ODBG110").await.unwrap();

        create.assert_async().await;
        update.assert_async().await;
        delete.assert_async().await;
    }

    #[tokio::test]
    async fn test_list_shared_folders() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("GET", "/api/vms/42/sharedfolders")
            .with_body(r#"[{"folder_id":"share","host_path":"/srv/share","flags":4}]"#)
            .create_async()
            .await;

        let client = create_test_client(&server.url());
        let folders = client.vms().vm("42").shared_folders().list().await.unwrap();

        assert_eq!(folders.len(), 1);
        assert_eq!(folders[0].folder_id, "share");
        assert_eq!(folders[0].flags, 4);
    }

    #[tokio::test]
    async fn test_power_get_and_set() {
        let mut server = Server::new_async().await;
        let _get = server
            .mock("GET", "/api/vms/42/power")
            .with_body(r#"{"power_state":"poweredOff"}"#)
            .create_async()
            .await;
        let set = server
            .mock("PUT", "/api/vms/42/power")
            .match_header("content-type", "application/vnd.vmware.vmw.rest-v1+json")
            .match_body("on")
            .with_body(r#"{"power_state":"poweredOn"}"#)
            .create_async()
            .await;

        let client = create_test_client(&server.url());
        let vm = client.vms().vm("42");

        assert_eq!(vm.power().get().await.unwrap().power_state, "poweredOff");
        assert_eq!(
            vm.power().set(PowerOperation::On).await.unwrap().power_state,
            "poweredOn"
        );
        set.assert_async().await;
    }

    #[tokio::test]
    async fn test_api_error_handling() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("GET", "/api/vms/missing/restrictions")
            .with_status(404)
            .with_body(r#"{"Code":104,"Message":"The virtual machine is not found"}"#)
            .create_async()
            .await;

        let client = create_test_client(&server.url());
        let result = client.vms().vm("missing").restrictions().await;

        match result {
            Err(crate::api::ApiError::ApiError { status, .. }) => assert_eq!(status, 404),
            other => panic!("Expected ApiError, got {:?}", other),
        }
    }
}
